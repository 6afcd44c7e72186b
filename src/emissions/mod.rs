pub mod share;
pub mod year;

use crate::table::TableError;

pub const DEFAULT_NAME_COLUMN: &str = "Country Name";
pub const DEFAULT_CODE_COLUMN: &str = "Country Code";
pub const DEFAULT_AGGREGATE_CODE: &str = "WLD";
pub const DEFAULT_SHARE_HEADER: &str = "Emissions Share";

/// Selects the total row of a table, e.g. `Country Code == WLD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub column: String,
    pub sentinel: String,
}

impl AggregateRow {
    pub fn new(column: impl Into<String>, sentinel: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            sentinel: sentinel.into(),
        }
    }
}

impl Default for AggregateRow {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_COLUMN, DEFAULT_AGGREGATE_CODE)
    }
}

pub(crate) fn parse_number(value: &str, column: &str, row: usize) -> Result<f64, TableError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| TableError::InvalidNumber {
            column: column.to_string(),
            row,
            value: value.to_string(),
        })
}
