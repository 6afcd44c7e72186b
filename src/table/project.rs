use crate::table::{Table, TableError};

pub fn project_columns(table: &Table, columns: &[&str]) -> Result<Table, TableError> {
    let indices = columns
        .iter()
        .map(|name| table.column_index(name))
        .collect::<Result<Vec<_>, _>>()?;

    let headers = columns.iter().map(|c| c.to_string()).collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Table::new(headers, rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/project.rs"]
mod tests;
