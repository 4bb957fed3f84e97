use crate::format::{COLUMN_HEADERS, format_row};
use anyhow::{Context, Result};
use rebarx_calc::ResultTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_CSV_FILE_NAME: &str = "reinforcement_calculator_results.csv";

pub fn write_csv(table: &ResultTable, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "{}", COLUMN_HEADERS.join(","))?;
    for row in table {
        let cells = format_row(row).map(|cell| escape(&cell));
        writeln!(writer, "{}", cells.join(","))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_csv(table: &ResultTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("create CSV file {}", path.display()))?;
    write_csv(table, BufWriter::new(file))
        .with_context(|| format!("write CSV file {}", path.display()))?;
    info!(path = %path.display(), rows = table.rows().len(), "CSV export complete");
    Ok(())
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
