//! Tabular dataset model
//!
//! A [`Dataset`] is an ordered list of named columns whose cells are
//! positionally aligned into rows. Cells are loosely typed: text, numeric,
//! or absent. Redaction mutates cells in place on a caller-owned copy; the
//! anomaly scanner only reads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value
///
/// Closed tagged variant covering the three value shapes that occur in
/// delimited financial exports. Numeric coercion is centralized in
/// [`CellValue::as_number`] so every consumer (outlier detection, negative
/// detection, summary statistics) applies the same rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Textual value, kept verbatim as loaded
    Text(String),
    /// Numeric value
    Number(f64),
    /// Absent/empty cell
    Null,
}

impl CellValue {
    /// Coerce the cell to a numeric value
    ///
    /// Text is trimmed and parsed as `f64`. NaN is treated as unparseable so
    /// that a literal `"NaN"` field drops out of numeric computations.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if !n.is_nan() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            Self::Null => None,
        }
    }

    /// Whether the cell is absent
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A named column of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header row
    pub name: String,
    /// Cell values, one per row
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Create a column from a name and cells
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// An in-memory tabular dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset from pre-built columns
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Append a column
    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<CellValue>) {
        self.columns.push(Column::new(name, cells));
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to all columns
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Look up a column by exact, case-sensitive name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether a column with this exact name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows (longest column; columns are normally equal length)
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    /// Numeric values of a column, in row order, unparseable cells dropped
    pub fn numeric_column(&self, name: &str) -> Vec<f64> {
        self.column(name)
            .map(|c| c.cells.iter().filter_map(CellValue::as_number).collect())
            .unwrap_or_default()
    }
}
