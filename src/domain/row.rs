//! Tabular row model shared between the data source and the renderer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of an extracted report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text cell
    Text(String),
    /// Whole-number cell
    Integer(i64),
    /// Decimal cell, rendered with the configured number format
    Number(f64),
    /// Calendar date cell
    Date(NaiveDate),
    /// SQL NULL, rendered as an empty cell
    Null,
}

impl CellValue {
    /// Numeric value of the cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Integer(v) => Some(*v as f64),
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// One extracted row of report data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Cells in query column order
    pub cells: Vec<CellValue>,
}

impl ReportRow {
    /// Creates a row from its cells
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Numeric value of the cell at `index`, if present and numeric
    pub fn number_at(&self, index: usize) -> Option<f64> {
        self.cells.get(index).and_then(CellValue::as_number)
    }
}

/// Sums the numeric cells of one column across all rows
///
/// Non-numeric and missing cells contribute nothing. Used for the summed
/// amount quoted in success notifications.
pub fn sum_column(rows: &[ReportRow], index: usize) -> f64 {
    rows.iter().filter_map(|row| row.number_at(index)).sum()
}
