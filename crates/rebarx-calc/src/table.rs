use crate::bar::{ResultRow, calculate_bar};
use rebarx_model::{BarSize, InputModel};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Full refresh: one row per configured bar, in `BarSize::ALL` order.
    pub fn compute(model: &InputModel) -> Self {
        let rows = model
            .bar_specs()
            .map(|bar| calculate_bar(&model.globals, &bar))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn row(&self, size: BarSize) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.size == size)
    }

    /// Row with the largest governing length; the earliest row wins a tie.
    pub fn governing_row(&self) -> Option<&ResultRow> {
        let mut best: Option<&ResultRow> = None;
        for row in &self.rows {
            match best {
                Some(current) if row.governing_length <= current.governing_length => {}
                _ => best = Some(row),
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
