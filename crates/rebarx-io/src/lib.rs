pub mod csv;
pub mod format;
pub mod json;
pub mod text;

pub use csv::{DEFAULT_CSV_FILE_NAME, export_csv, write_csv};
pub use format::{COLUMN_HEADERS, format_row};
pub use json::{input_to_json, load_input, report_to_json, save_input};
pub use text::{render_summary, render_table, render_warnings};
