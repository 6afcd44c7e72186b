pub mod export;
pub mod filter;
pub mod loader;
pub mod project;

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("cannot access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed csv in {origin}: {source}")]
    Format {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("empty input in {0}: a header row is required")]
    EmptyInput(String),
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("column {column} has {found} cells, table has {expected} rows")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("invalid number {value:?} in column {column} at row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
    #[error("cannot divide column {column} by a zero total")]
    ZeroTotal { column: String },
    #[error("no year column has a non-zero value for {column} = {sentinel}")]
    NoValidYear { column: String, sentinel: String },
}

/// In-memory table of string cells. Column names are unique and every row has
/// one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TableError::RaggedRow {
                    row: i + 1,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            headers,
            index,
            rows,
        })
    }

    /// Same header, different rows. Rows must come from a table with this header.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: self.headers.clone(),
            index: self.index.clone(),
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &str> + '_, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    pub fn with_column(&self, header: &str, cells: Vec<String>) -> Result<Self, TableError> {
        if self.index.contains_key(header) {
            return Err(TableError::DuplicateColumn(header.to_string()));
        }
        if cells.len() != self.rows.len() {
            return Err(TableError::RaggedColumn {
                column: header.to_string(),
                expected: self.rows.len(),
                found: cells.len(),
            });
        }
        let mut headers = self.headers.clone();
        headers.push(header.to_string());
        let mut index = self.index.clone();
        index.insert(header.to_string(), headers.len() - 1);
        let rows = self
            .rows
            .iter()
            .zip(cells)
            .map(|(row, cell)| {
                let mut row = row.clone();
                row.push(cell);
                row
            })
            .collect();
        Ok(Self {
            headers,
            index,
            rows,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/mod.rs"]
mod tests;
