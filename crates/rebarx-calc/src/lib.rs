pub mod bar;
pub mod table;
pub mod warning;

pub use bar::{MIN_BAR_AREA, ResultRow, calculate_bar};
pub use table::ResultTable;
pub use warning::{Warning, evaluate_warnings};
