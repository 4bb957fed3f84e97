use rebarx_calc::ResultRow;

pub const COLUMN_HEADERS: [&str; 12] = [
    "Bar",
    "Dia (mm)",
    "Area/bar (mm²)",
    "Bars (#)",
    "Spacing (in O.C.)",
    "d (mm)",
    "l_db (mm)",
    "l_span (mm)",
    "l_add (mm)",
    "L_req (ft)",
    "L_03ln (ft)",
    "Governing length (ft)",
];

/// Presentation cells for one row, in `COLUMN_HEADERS` order. Undefined
/// spacing becomes an empty cell.
pub fn format_row(row: &ResultRow) -> [String; 12] {
    [
        row.label().to_string(),
        rounded(row.diameter, 2),
        rounded(row.area_per_bar, 1),
        row.bar_count.to_string(),
        row.spacing
            .map(|spacing| rounded(spacing, 2))
            .unwrap_or_default(),
        rounded(row.effective_depth, 1),
        rounded(row.dev_length_db, 1),
        rounded(row.dev_length_span, 1),
        rounded(row.add_on_length, 1),
        rounded(row.required_length, 3),
        rounded(row.code_length_03ln, 3),
        rounded(row.governing_length, 3),
    ]
}

/// Rounds to `decimals` places, then prints the shortest text for the rounded
/// value with at least one decimal digit (`300.0`, `6.8`, `9.423`).
pub fn rounded(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let shortest = fixed
        .parse::<f64>()
        .map(|parsed| parsed.to_string())
        .unwrap_or(fixed);
    if shortest.contains(['.', 'e', 'i', 'N']) {
        shortest
    } else {
        format!("{shortest}.0")
    }
}
