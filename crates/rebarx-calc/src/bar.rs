use rebarx_base::{IN_PER_FT, LengthUnit};
use rebarx_model::{BarSize, BarSpec, GlobalInputs};
use serde::{Deserialize, Serialize};

/// Substituted for a zero bar area before dividing.
pub const MIN_BAR_AREA: f64 = 1.0e-9;

const SLAB_DEPTH_OFFSET_MM: f64 = 40.0;
const DEV_LENGTH_DB_FACTOR: f64 = 16.0;
const DEV_LENGTH_SPAN_DIVISOR: f64 = 16.0;
const CODE_SPAN_FACTOR: f64 = 0.3;

/// Derived quantities for one bar size. Values keep full precision; rounding
/// is left to whoever renders the row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub size: BarSize,
    /// mm
    pub diameter: f64,
    /// mm²
    pub area_per_bar: f64,
    pub bar_count: u64,
    /// in, on-center. `None` when fewer than two bars are needed.
    pub spacing: Option<f64>,
    /// mm
    pub effective_depth: f64,
    /// mm
    pub dev_length_db: f64,
    /// mm
    pub dev_length_span: f64,
    /// mm
    pub add_on_length: f64,
    /// ft
    pub required_length: f64,
    /// ft
    pub code_length_03ln: f64,
    /// ft
    pub governing_length: f64,
}

impl ResultRow {
    pub fn label(&self) -> &'static str {
        self.size.label()
    }
}

pub fn calculate_bar(globals: &GlobalInputs, bar: &BarSpec) -> ResultRow {
    let bar_count = bar_count(globals.required_area, bar.area_per_bar);
    let spacing =
        (bar_count >= 2).then(|| (globals.wall_length * IN_PER_FT) / (bar_count - 1) as f64);

    let effective_depth = globals.slab_thickness - bar.diameter / 2.0 - SLAB_DEPTH_OFFSET_MM;
    let dev_length_db = DEV_LENGTH_DB_FACTOR * bar.diameter;
    let dev_length_span = globals.clear_span / DEV_LENGTH_SPAN_DIVISOR;
    let add_on_length = effective_depth.max(dev_length_db).max(dev_length_span);

    let required_mm = LengthUnit::Meter.to_mm(globals.inflection_distance)
        + globals.wall_thickness
        + bar.hook_length
        - globals.clear_cover
        + add_on_length;
    let code_03ln_mm = CODE_SPAN_FACTOR * globals.clear_span
        + globals.wall_thickness
        + bar.hook_length
        - globals.clear_cover;

    let required_length = LengthUnit::Foot.from_mm(required_mm);
    let code_length_03ln = LengthUnit::Foot.from_mm(code_03ln_mm);

    ResultRow {
        size: bar.size,
        diameter: bar.diameter,
        area_per_bar: bar.area_per_bar,
        bar_count,
        spacing,
        effective_depth,
        dev_length_db,
        dev_length_span,
        add_on_length,
        required_length,
        code_length_03ln,
        governing_length: required_length.max(code_length_03ln),
    }
}

fn bar_count(required_area: f64, area_per_bar: f64) -> u64 {
    if required_area > 0.0 {
        (required_area / area_per_bar.max(MIN_BAR_AREA)).ceil() as u64
    } else {
        0
    }
}
