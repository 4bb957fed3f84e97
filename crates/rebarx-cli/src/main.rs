use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rebarx_calc::{ResultTable, Warning, evaluate_warnings};
use rebarx_io::{
    DEFAULT_CSV_FILE_NAME, export_csv, input_to_json, render_summary, render_table, render_warnings,
    report_to_json, save_input,
};
use rebarx_model::InputModel;
use std::path::PathBuf;
use tracing::warn;

mod input;

use input::{InputArgs, resolve_model};

#[derive(Parser)]
#[command(name = "rebarx")]
#[command(about = "Rebar development length and spacing for 10M-30M bars")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the result table and warnings.
    Compute(ComputeArgs),
    /// Write the result table as CSV.
    Export(ExportArgs),
    /// Write the default input model as JSON.
    Defaults(DefaultsArgs),
    /// List every parameter name with its resolved value.
    Parameters(ParametersArgs),
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
struct ComputeArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Append the per-bar governing length summary.
    #[arg(long)]
    summary: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long, default_value = DEFAULT_CSV_FILE_NAME)]
    out: PathBuf,
}

#[derive(Args)]
struct DefaultsArgs {
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ParametersArgs {
    #[command(flatten)]
    input: InputArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute(args) => compute(args),
        Command::Export(args) => export(args),
        Command::Defaults(args) => defaults(args),
        Command::Parameters(args) => parameters(args),
    }
}

fn compute(args: ComputeArgs) -> Result<()> {
    let model = resolve_model(&args.input)?;
    let table = ResultTable::compute(&model);
    let warnings = evaluate_warnings(&table);

    match args.format {
        OutputFormat::Table => {
            print!("{}", render_table(&table));
            if !warnings.is_empty() {
                println!();
                print!("{}", render_warnings(&warnings));
            }
        }
        OutputFormat::Json => {
            log_warnings(&warnings);
            println!("{}", report_to_json(&table, &warnings)?);
        }
    }

    if args.summary {
        println!();
        print!("{}", render_summary(&table));
    }
    Ok(())
}

fn export(args: ExportArgs) -> Result<()> {
    let model = resolve_model(&args.input)?;
    let table = ResultTable::compute(&model);
    log_warnings(&evaluate_warnings(&table));

    export_csv(&table, &args.out).context("CSV export failed")?;
    Ok(())
}

fn defaults(args: DefaultsArgs) -> Result<()> {
    let model = InputModel::default();
    match args.out {
        Some(path) => save_input(&model, &path).context("writing defaults failed")?,
        None => println!("{}", input_to_json(&model)?),
    }
    Ok(())
}

fn parameters(args: ParametersArgs) -> Result<()> {
    let model = resolve_model(&args.input)?;
    for (name, value) in model.to_parameters() {
        println!("{name} = {value}");
    }
    Ok(())
}

fn log_warnings(warnings: &[Warning]) {
    for warning in warnings {
        warn!(bar = %warning.size(), "{warning}");
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
