use rebarx_base::{Error, Result, ensure_non_negative};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarSize {
    #[serde(rename = "10M")]
    M10,
    #[serde(rename = "15M")]
    M15,
    #[serde(rename = "20M")]
    M20,
    #[serde(rename = "25M")]
    M25,
    #[serde(rename = "30M")]
    M30,
}

impl BarSize {
    /// Display order of the result table.
    pub const ALL: [BarSize; 5] = [
        BarSize::M10,
        BarSize::M15,
        BarSize::M20,
        BarSize::M25,
        BarSize::M30,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::M10 => "10M",
            Self::M15 => "15M",
            Self::M20 => "20M",
            Self::M25 => "25M",
            Self::M30 => "30M",
        }
    }

    /// CSA nominal properties: diameter (mm), area (mm²), hook length (mm).
    pub const fn default_properties(self) -> BarProperties {
        match self {
            Self::M10 => BarProperties::new(11.3, 100.0, 200.0),
            Self::M15 => BarProperties::new(16.0, 200.0, 250.0),
            Self::M20 => BarProperties::new(19.5, 300.0, 300.0),
            Self::M25 => BarProperties::new(25.2, 500.0, 400.0),
            Self::M30 => BarProperties::new(29.9, 700.0, 500.0),
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BarSize {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        BarSize::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownBarSize(trimmed.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarProperties {
    pub diameter: f64,
    pub area_per_bar: f64,
    pub hook_length: f64,
}

impl BarProperties {
    pub const fn new(diameter: f64, area_per_bar: f64, hook_length: f64) -> Self {
        Self {
            diameter,
            area_per_bar,
            hook_length,
        }
    }
}

/// One bar size together with the properties used for a computation pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub size: BarSize,
    pub diameter: f64,
    pub area_per_bar: f64,
    pub hook_length: f64,
}

impl BarSpec {
    pub fn new(size: BarSize, properties: BarProperties) -> Self {
        Self {
            size,
            diameter: properties.diameter,
            area_per_bar: properties.area_per_bar,
            hook_length: properties.hook_length,
        }
    }

    pub fn label(&self) -> &'static str {
        self.size.label()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalInputs {
    /// mm², total over the wall length.
    pub required_area: f64,
    /// ft
    pub wall_length: f64,
    /// mm
    pub wall_thickness: f64,
    /// mm
    pub clear_cover: f64,
    /// m, measured beyond the support.
    pub inflection_distance: f64,
    /// mm
    pub clear_span: f64,
    /// mm
    pub slab_thickness: f64,
}

impl Default for GlobalInputs {
    fn default() -> Self {
        Self {
            required_area: 7416.0,
            wall_length: 13.6,
            wall_thickness: 254.0,
            clear_cover: 38.0,
            inflection_distance: 2.0,
            clear_span: 5700.0,
            slab_thickness: 300.0,
        }
    }
}

pub const GLOBAL_PARAMETERS: [&str; 7] = [
    "required_area",
    "wall_length",
    "wall_thickness",
    "clear_cover",
    "inflection_distance",
    "clear_span",
    "slab_thickness",
];

pub const BAR_PARAMETERS: [&str; 3] = ["diameter", "area", "hook"];

impl GlobalInputs {
    fn value(&self, name: &str) -> Option<f64> {
        match name {
            "required_area" => Some(self.required_area),
            "wall_length" => Some(self.wall_length),
            "wall_thickness" => Some(self.wall_thickness),
            "clear_cover" => Some(self.clear_cover),
            "inflection_distance" => Some(self.inflection_distance),
            "clear_span" => Some(self.clear_span),
            "slab_thickness" => Some(self.slab_thickness),
            _ => None,
        }
    }

    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "required_area" => Some(&mut self.required_area),
            "wall_length" => Some(&mut self.wall_length),
            "wall_thickness" => Some(&mut self.wall_thickness),
            "clear_cover" => Some(&mut self.clear_cover),
            "inflection_distance" => Some(&mut self.inflection_distance),
            "clear_span" => Some(&mut self.clear_span),
            "slab_thickness" => Some(&mut self.slab_thickness),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSet {
    #[serde(rename = "10M")]
    m10: BarProperties,
    #[serde(rename = "15M")]
    m15: BarProperties,
    #[serde(rename = "20M")]
    m20: BarProperties,
    #[serde(rename = "25M")]
    m25: BarProperties,
    #[serde(rename = "30M")]
    m30: BarProperties,
}

impl Default for BarSet {
    fn default() -> Self {
        Self {
            m10: BarSize::M10.default_properties(),
            m15: BarSize::M15.default_properties(),
            m20: BarSize::M20.default_properties(),
            m25: BarSize::M25.default_properties(),
            m30: BarSize::M30.default_properties(),
        }
    }
}

impl BarSet {
    pub fn get(&self, size: BarSize) -> BarProperties {
        match size {
            BarSize::M10 => self.m10,
            BarSize::M15 => self.m15,
            BarSize::M20 => self.m20,
            BarSize::M25 => self.m25,
            BarSize::M30 => self.m30,
        }
    }

    pub fn with(mut self, size: BarSize, properties: BarProperties) -> Self {
        *self.slot(size) = properties;
        self
    }

    fn slot(&mut self, size: BarSize) -> &mut BarProperties {
        match size {
            BarSize::M10 => &mut self.m10,
            BarSize::M15 => &mut self.m15,
            BarSize::M20 => &mut self.m20,
            BarSize::M25 => &mut self.m25,
            BarSize::M30 => &mut self.m30,
        }
    }

    pub fn specs(&self) -> impl Iterator<Item = BarSpec> + '_ {
        BarSize::ALL
            .into_iter()
            .map(|size| BarSpec::new(size, self.get(size)))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ParameterValue {
    Integer(i64),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ParameterValue {
    /// Reads a command-line style value, preferring the narrowest type.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::Number(value);
        }
        if let Ok(value) = trimmed.parse::<bool>() {
            return Self::Bool(value);
        }
        Self::Text(trimmed.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            Self::Bool(_) | Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

pub type ParameterSet = BTreeMap<String, ParameterValue>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputModel {
    pub globals: GlobalInputs,
    pub bars: BarSet,
}

impl InputModel {
    pub fn new(globals: GlobalInputs, bars: BarSet) -> Self {
        Self { globals, bars }
    }

    pub fn bar_specs(&self) -> impl Iterator<Item = BarSpec> + '_ {
        self.bars.specs()
    }

    pub fn with_bar(self, size: BarSize, properties: BarProperties) -> Self {
        Self {
            globals: self.globals,
            bars: self.bars.with(size, properties),
        }
    }

    /// Boundary check: every value finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for name in GLOBAL_PARAMETERS {
            if let Some(value) = self.globals.value(name) {
                ensure_non_negative(name, value)?;
            }
        }
        for spec in self.bar_specs() {
            let label = spec.label();
            ensure_non_negative(&format!("{label}.diameter"), spec.diameter)?;
            ensure_non_negative(&format!("{label}.area"), spec.area_per_bar)?;
            ensure_non_negative(&format!("{label}.hook"), spec.hook_length)?;
            if spec.area_per_bar == 0.0 {
                warn!(bar = label, "bar area is zero; bar count will use the minimum area floor");
            }
        }
        Ok(())
    }

    pub fn to_parameters(&self) -> ParameterSet {
        let mut parameters = ParameterSet::new();
        for name in GLOBAL_PARAMETERS {
            if let Some(value) = self.globals.value(name) {
                parameters.insert(name.to_string(), ParameterValue::Number(value));
            }
        }
        for spec in self.bar_specs() {
            let label = spec.label();
            parameters.insert(
                format!("{label}.diameter"),
                ParameterValue::Number(spec.diameter),
            );
            parameters.insert(
                format!("{label}.area"),
                ParameterValue::Number(spec.area_per_bar),
            );
            parameters.insert(
                format!("{label}.hook"),
                ParameterValue::Number(spec.hook_length),
            );
        }
        parameters
    }

    /// Returns a copy with each named parameter replaced.
    pub fn with_parameters(&self, parameters: &ParameterSet) -> Result<Self> {
        let mut model = *self;
        for (name, value) in parameters {
            let number = value.as_number().ok_or_else(|| {
                Error::InvalidParameter(format!("{name} expects a number, got {value}"))
            })?;
            *model.parameter_slot(name)? = number;
        }
        Ok(model)
    }

    fn parameter_slot(&mut self, name: &str) -> Result<&mut f64> {
        let key = name.trim();
        if let Some(slot) = self.globals.slot(key) {
            return Ok(slot);
        }
        let Some((label, field)) = key.split_once('.') else {
            return Err(Error::UnknownParameter(key.to_string()));
        };
        let size: BarSize = label.parse()?;
        let properties = self.bars.slot(size);
        match field {
            "diameter" => Ok(&mut properties.diameter),
            "area" => Ok(&mut properties.area_per_bar),
            "hook" => Ok(&mut properties.hook_length),
            _ => Err(Error::UnknownParameter(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_sizes_parse_from_labels() -> Result<()> {
        assert_eq!(" 20m ".parse::<BarSize>()?, BarSize::M20);
        assert_eq!("30M".parse::<BarSize>()?, BarSize::M30);
        assert!(matches!(
            "35M".parse::<BarSize>(),
            Err(Error::UnknownBarSize(_))
        ));
        Ok(())
    }

    #[test]
    fn bar_specs_follow_display_order() {
        let model = InputModel::default();
        let labels: Vec<&str> = model.bar_specs().map(|spec| spec.label()).collect();
        assert_eq!(labels, ["10M", "15M", "20M", "25M", "30M"]);

        let spec = model.bar_specs().nth(2).map(|spec| spec.diameter);
        assert_eq!(spec, Some(19.5));
    }

    #[test]
    fn parameters_round_trip() -> Result<()> {
        let model =
            InputModel::default().with_bar(BarSize::M25, BarProperties::new(25.0, 510.0, 410.0));
        let parameters = model.to_parameters();
        assert_eq!(
            parameters.len(),
            GLOBAL_PARAMETERS.len() + BarSize::ALL.len() * BAR_PARAMETERS.len()
        );

        let rebuilt = InputModel::default().with_parameters(&parameters)?;
        assert_eq!(rebuilt, model);
        Ok(())
    }

    #[test]
    fn parameter_overrides_target_one_field() -> Result<()> {
        let mut overrides = ParameterSet::new();
        overrides.insert("slab_thickness".to_string(), ParameterValue::parse("30"));
        overrides.insert("15M.hook".to_string(), ParameterValue::parse("275.5"));

        let model = InputModel::default().with_parameters(&overrides)?;
        assert_eq!(model.globals.slab_thickness, 30.0);
        assert_eq!(model.bars.get(BarSize::M15).hook_length, 275.5);
        assert_eq!(model.bars.get(BarSize::M15).diameter, 16.0);
        assert_eq!(model.bars.get(BarSize::M10), BarSize::M10.default_properties());
        Ok(())
    }

    #[test]
    fn unknown_and_non_numeric_parameters_are_rejected() {
        let model = InputModel::default();

        let mut overrides = ParameterSet::new();
        overrides.insert("slab_depth".to_string(), ParameterValue::Number(1.0));
        assert!(matches!(
            model.with_parameters(&overrides),
            Err(Error::UnknownParameter(_))
        ));

        let mut overrides = ParameterSet::new();
        overrides.insert("20M.weight".to_string(), ParameterValue::Number(1.0));
        assert!(matches!(
            model.with_parameters(&overrides),
            Err(Error::UnknownParameter(_))
        ));

        let mut overrides = ParameterSet::new();
        overrides.insert("40M.area".to_string(), ParameterValue::Number(1.0));
        assert!(matches!(
            model.with_parameters(&overrides),
            Err(Error::UnknownBarSize(_))
        ));

        let mut overrides = ParameterSet::new();
        overrides.insert("clear_cover".to_string(), ParameterValue::parse("thick"));
        assert!(matches!(
            model.with_parameters(&overrides),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_values() {
        assert!(InputModel::default().validate().is_ok());

        let mut model = InputModel::default();
        model.globals.clear_span = -1.0;
        assert!(matches!(model.validate(), Err(Error::InvalidParameter(_))));

        let model =
            InputModel::default().with_bar(BarSize::M10, BarProperties::new(11.3, -100.0, 200.0));
        assert!(model.validate().is_err());
    }

    #[test]
    fn zero_bar_area_passes_validation() {
        let model =
            InputModel::default().with_bar(BarSize::M10, BarProperties::new(11.3, 0.0, 200.0));
        assert!(model.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() -> std::result::Result<(), serde_json::Error> {
        let text = r#"{
            "globals": { "slab_thickness": 250.0 },
            "bars": { "20M": { "diameter": 20.0, "area_per_bar": 310.0, "hook_length": 320.0 } }
        }"#;
        let model: InputModel = serde_json::from_str(text)?;
        assert_eq!(model.globals.slab_thickness, 250.0);
        assert_eq!(model.globals.required_area, 7416.0);
        assert_eq!(model.bars.get(BarSize::M20), BarProperties::new(20.0, 310.0, 320.0));
        assert_eq!(model.bars.get(BarSize::M30), BarSize::M30.default_properties());
        Ok(())
    }
}
