use anyhow::{Context, Result, bail};
use clap::Args;
use rebarx_io::load_input;
use rebarx_model::{BarProperties, BarSize, InputModel, ParameterSet, ParameterValue};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Default)]
pub struct InputArgs {
    /// JSON input file; missing fields keep their defaults.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Override one parameter, e.g. `slab_thickness=250` or `20M.hook=320`.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
    /// Override one bar size, e.g. `25M:25.2,500,400`.
    #[arg(long = "bar", value_name = "LABEL:DIA,AREA,HOOK")]
    pub bar: Vec<String>,
}

/// Defaults, then the input file, then `--bar`, then `--set`.
pub fn resolve_model(args: &InputArgs) -> Result<InputModel> {
    let mut model = match &args.input {
        Some(path) => load_input(path)?,
        None => InputModel::default(),
    };

    for text in &args.bar {
        let (size, properties) = parse_bar(text)?;
        model = model.with_bar(size, properties);
    }

    let overrides = parse_overrides(&args.set)?;
    let model = model
        .with_parameters(&overrides)
        .context("invalid --set override")?;
    model.validate().context("invalid input")?;
    debug!(?model, "input model resolved");
    Ok(model)
}

fn parse_overrides(items: &[String]) -> Result<ParameterSet> {
    let mut parameters = ParameterSet::new();
    for item in items {
        let Some((name, value)) = item.split_once('=') else {
            bail!("--set expects NAME=VALUE, got {item}");
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("--set expects a parameter name before '=', got {item}");
        }
        parameters.insert(name.to_string(), ParameterValue::parse(value));
    }
    Ok(parameters)
}

fn parse_bar(text: &str) -> Result<(BarSize, BarProperties)> {
    let Some((label, values)) = text.split_once(':') else {
        bail!("--bar expects LABEL:DIA,AREA,HOOK, e.g. 20M:19.5,300,300");
    };
    let size: BarSize = label.parse()?;

    let parts: Vec<&str> = values.split(',').collect();
    if parts.len() != 3 {
        bail!("--bar expects three comma-separated numbers after the label, e.g. 20M:19.5,300,300");
    }
    let diameter: f64 = parts[0].trim().parse().context("invalid bar diameter")?;
    let area: f64 = parts[1].trim().parse().context("invalid bar area")?;
    let hook: f64 = parts[2].trim().parse().context("invalid hook length")?;
    Ok((size, BarProperties::new(diameter, area, hook)))
}
