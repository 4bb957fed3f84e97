use crate::table::ResultTable;
use rebarx_model::BarSize;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    SpacingUndefined { size: BarSize, bar_count: u64 },
    NegativeEffectiveDepth { size: BarSize, value: f64 },
}

impl Warning {
    pub fn size(&self) -> BarSize {
        match self {
            Self::SpacingUndefined { size, .. } | Self::NegativeEffectiveDepth { size, .. } => {
                *size
            }
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpacingUndefined { size, bar_count } => write!(
                f,
                "{size}: Only {bar_count} bar computed; spacing O.C. is undefined."
            ),
            Self::NegativeEffectiveDepth { size, value } => write!(
                f,
                "{size}: Effective depth d is negative ({value:.1} mm). Check t_slab / bar size / cover."
            ),
        }
    }
}

/// Flags rows that need attention, in table order.
pub fn evaluate_warnings(table: &ResultTable) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for row in table {
        if row.bar_count <= 1 {
            warnings.push(Warning::SpacingUndefined {
                size: row.size,
                bar_count: row.bar_count,
            });
        }
        if row.effective_depth < 0.0 {
            warnings.push(Warning::NegativeEffectiveDepth {
                size: row.size,
                value: row.effective_depth,
            });
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebarx_model::InputModel;

    #[test]
    fn defaults_produce_no_warnings() {
        let table = ResultTable::compute(&InputModel::default());
        assert!(evaluate_warnings(&table).is_empty());
    }

    #[test]
    fn message_text() {
        let warning = Warning::SpacingUndefined {
            size: BarSize::M10,
            bar_count: 0,
        };
        assert_eq!(
            warning.to_string(),
            "10M: Only 0 bar computed; spacing O.C. is undefined."
        );

        let warning = Warning::NegativeEffectiveDepth {
            size: BarSize::M30,
            value: -24.95,
        };
        assert_eq!(
            warning.to_string(),
            "30M: Effective depth d is negative (-24.9 mm). Check t_slab / bar size / cover."
        );
    }
}
