use tracing::info;

use crate::emissions::AggregateRow;
use crate::emissions::share::append_share;
use crate::emissions::year::{aggregate_total, latest_valid_year};
use crate::pipeline::Step;
use crate::table::filter::{Predicate, filter_rows};
use crate::table::project::project_columns;
use crate::table::{Table, TableError};

pub struct FilterStep {
    pub predicate: Predicate,
}

impl Step for FilterStep {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn apply(&self, table: Table) -> Result<Table, TableError> {
        filter_rows(&table, &self.predicate)
    }
}

pub struct ProjectStep {
    pub columns: Vec<String>,
}

impl Step for ProjectStep {
    fn name(&self) -> &'static str {
        "project"
    }

    fn apply(&self, table: Table) -> Result<Table, TableError> {
        let columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        project_columns(&table, &columns)
    }
}

/// Keeps `keep` plus the newest year column with a positive aggregate value.
pub struct LatestYearStep {
    pub keep: Vec<String>,
    pub aggregate: AggregateRow,
}

impl Step for LatestYearStep {
    fn name(&self) -> &'static str {
        "latest_year"
    }

    fn apply(&self, table: Table) -> Result<Table, TableError> {
        let year = latest_valid_year(&table, &self.aggregate)?.to_string();
        info!(year = %year, "latest valid year selected");
        let mut columns: Vec<&str> = self.keep.iter().map(String::as_str).collect();
        columns.push(&year);
        project_columns(&table, &columns)
    }
}

/// Appends each row's share of the aggregate row's value in the last column.
pub struct ShareStep {
    pub aggregate: AggregateRow,
    pub header: String,
}

impl Step for ShareStep {
    fn name(&self) -> &'static str {
        "share"
    }

    fn apply(&self, table: Table) -> Result<Table, TableError> {
        let Some(column) = table.headers().last() else {
            return Err(TableError::EmptyInput("share source table".to_string()));
        };
        let total = aggregate_total(&table, &self.aggregate, column)?;
        info!(column = %column, total, "aggregate total");
        append_share(&table, total, &self.header)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/steps.rs"]
mod tests;
