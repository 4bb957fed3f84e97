use crate::format::{COLUMN_HEADERS, format_row, rounded};
use rebarx_calc::{ResultTable, Warning};

/// Right-aligned fixed-width rendering of the table for a terminal.
pub fn render_table(table: &ResultTable) -> String {
    let cells: Vec<[String; 12]> = table.rows().iter().map(format_row).collect();
    let mut widths = COLUMN_HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMN_HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{cell}", " ".repeat(pad))
        })
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}

pub fn render_warnings(warnings: &[Warning]) -> String {
    warnings
        .iter()
        .map(|warning| format!("warning: {warning}\n"))
        .collect()
}

/// One line per bar: governing length with both candidates.
pub fn render_summary(table: &ResultTable) -> String {
    let mut out = String::new();
    for row in table {
        out.push_str(&format!(
            "{} — Governing length (ft): {} (Req {}, 0.3ln {})\n",
            row.label(),
            rounded(row.governing_length, 3),
            rounded(row.required_length, 3),
            rounded(row.code_length_03ln, 3),
        ));
    }
    if let Some(row) = table.governing_row() {
        out.push_str(&format!(
            "Longest bar: {} at {} ft\n",
            row.label(),
            rounded(row.governing_length, 3)
        ));
    }
    out
}
