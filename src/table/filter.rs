use std::collections::BTreeSet;

use crate::table::{Table, TableError};

/// Conjunction of exact `column == value` matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Predicate {
    terms: Vec<(String, String)>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.terms.push((column.into(), value.into()));
    }

    pub fn terms(&self) -> &[(String, String)] {
        &self.terms
    }

    fn resolve<'a>(&'a self, table: &Table) -> Result<Vec<(usize, &'a str)>, TableError> {
        self.terms
            .iter()
            .map(|(column, value)| {
                table
                    .column_index(column)
                    .map(|idx| (idx, value.as_str()))
            })
            .collect()
    }
}

pub fn filter_rows(table: &Table, predicate: &Predicate) -> Result<Table, TableError> {
    let resolved = predicate.resolve(table)?;
    let rows = table
        .rows()
        .iter()
        .filter(|row| resolved.iter().all(|(idx, value)| row[*idx] == *value))
        .cloned()
        .collect();
    Ok(table.with_rows(rows))
}

pub fn distinct_values(table: &Table, column: &str) -> Result<Vec<String>, TableError> {
    let values: BTreeSet<&str> = table.column(column)?.collect();
    Ok(values.into_iter().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/filter.rs"]
mod tests;
