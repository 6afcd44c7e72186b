use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::debug;

use crate::table::{Table, TableError};

pub fn load_table(path: &Path) -> Result<Table, TableError> {
    let file = File::open(path).map_err(|source| TableError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(BufReader::new(file), &path.to_string_lossy())?;
    debug!(
        path = %path.display(),
        rows = table.n_rows(),
        cols = table.n_cols(),
        "loaded table"
    );
    Ok(table)
}

pub fn read_table<R: io::Read>(reader: R, origin: &str) -> Result<Table, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let format_err = |source: csv::Error| TableError::Format {
        origin: origin.to_string(),
        source,
    };

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(format_err)?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(TableError::EmptyInput(origin.to_string()));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(format_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::new(headers, rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/loader.rs"]
mod tests;
