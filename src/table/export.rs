use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::table::{Table, TableError};

pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(table.headers())?;
    for row in table.rows() {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_to_path(table: &Table, path: &Path) -> Result<(), TableError> {
    let file_err = |source: io::Error| TableError::File {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(file_err)?;
    write_table(table, BufWriter::new(file)).map_err(|e| file_err(e.into()))?;
    info!(path = %path.display(), rows = table.n_rows(), "wrote csv");
    Ok(())
}

pub fn export_to_writer<W: Write>(table: &Table, writer: W) -> Result<(), TableError> {
    write_table(table, writer).map_err(|e| TableError::File {
        path: "<stdout>".into(),
        source: e.into(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/export.rs"]
mod tests;
