use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MM_PER_M: f64 = 1000.0;
pub const MM_PER_FT: f64 = 304.8;
pub const IN_PER_FT: f64 = 12.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Meter,
    Foot,
}

impl LengthUnit {
    pub const fn mm_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Meter => MM_PER_M,
            Self::Foot => MM_PER_FT,
        }
    }

    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }

    pub fn from_mm(self, value_mm: f64) -> f64 {
        value_mm / self.mm_per_unit()
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("unknown bar size: {0}")]
    UnknownBarSize(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter(format!("{name} must be a finite number")));
    }
    if value < 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be >= 0")));
    }
    Ok(())
}
