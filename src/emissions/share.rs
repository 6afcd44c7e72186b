use crate::emissions::parse_number;
use crate::table::{Table, TableError};

pub fn append_share(table: &Table, total: f64, header: &str) -> Result<Table, TableError> {
    let Some(column) = table.headers().last() else {
        return Err(TableError::EmptyInput("share source table".to_string()));
    };
    if total == 0.0 {
        return Err(TableError::ZeroTotal {
            column: column.clone(),
        });
    }

    let mut shares = Vec::with_capacity(table.n_rows());
    for (row_no, row) in table.rows().iter().enumerate() {
        let cell = &row[row.len() - 1];
        let share = if cell.is_empty() {
            "0".to_string()
        } else {
            format_share(parse_number(cell, column, row_no + 1)? / total)
        };
        shares.push(share);
    }
    table.with_column(header, shares)
}

/// Whole values keep a trailing `.0` so a computed share reads as a float.
fn format_share(share: f64) -> String {
    if share.is_finite() && share.fract() == 0.0 {
        format!("{share:.1}")
    } else {
        share.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/emissions/share.rs"]
mod tests;
