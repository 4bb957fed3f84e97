use anyhow::{Context, Result};
use rebarx_calc::{ResultRow, ResultTable, Warning};
use rebarx_model::InputModel;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Reads an input model. Fields missing from the file keep their defaults.
pub fn load_input(path: impl AsRef<Path>) -> Result<InputModel> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read input file {}", path.display()))?;
    let model: InputModel = serde_json::from_str(&text)
        .with_context(|| format!("parse input file {}", path.display()))?;
    debug!(path = %path.display(), "input file loaded");
    Ok(model)
}

pub fn save_input(model: &InputModel, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let text = input_to_json(model)?;
    std::fs::write(path, text).with_context(|| format!("write input file {}", path.display()))?;
    info!(path = %path.display(), "input file written");
    Ok(())
}

pub fn input_to_json(model: &InputModel) -> Result<String> {
    serde_json::to_string_pretty(model).context("serialize input model")
}

#[derive(Serialize)]
struct Report<'a> {
    rows: &'a [ResultRow],
    warnings: Vec<ReportWarning<'a>>,
}

#[derive(Serialize)]
struct ReportWarning<'a> {
    warning: &'a Warning,
    message: String,
}

/// Full-precision rows plus warning messages.
pub fn report_to_json(table: &ResultTable, warnings: &[Warning]) -> Result<String> {
    let report = Report {
        rows: table.rows(),
        warnings: warnings
            .iter()
            .map(|warning| ReportWarning {
                warning,
                message: warning.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report).context("serialize result report")
}
