use crate::emissions::{AggregateRow, parse_number};
use crate::table::{Table, TableError};

/// Headers made of exactly four ASCII digits, newest first.
pub fn year_columns(table: &Table) -> Vec<(u32, &str)> {
    let mut years: Vec<(u32, &str)> = table
        .headers()
        .iter()
        .filter(|h| h.len() == 4 && h.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|h| h.parse::<u32>().ok().map(|year| (year, h.as_str())))
        .collect();
    years.sort_by(|a, b| b.0.cmp(&a.0));
    years
}

/// Value of `column` in the first aggregate row where it is non-empty.
pub fn aggregate_value(
    table: &Table,
    aggregate: &AggregateRow,
    column: &str,
) -> Result<Option<f64>, TableError> {
    let key_idx = table.column_index(&aggregate.column)?;
    let value_idx = table.column_index(column)?;
    for (row_no, row) in table.rows().iter().enumerate() {
        if row[key_idx] != aggregate.sentinel || row[value_idx].is_empty() {
            continue;
        }
        return parse_number(&row[value_idx], column, row_no + 1).map(Some);
    }
    Ok(None)
}

pub fn aggregate_total(
    table: &Table,
    aggregate: &AggregateRow,
    column: &str,
) -> Result<f64, TableError> {
    Ok(aggregate_value(table, aggregate, column)?.unwrap_or(0.0))
}

pub fn latest_valid_year(table: &Table, aggregate: &AggregateRow) -> Result<u32, TableError> {
    table.column_index(&aggregate.column)?;
    for (year, header) in year_columns(table) {
        if aggregate_total(table, aggregate, header)? > 0.0 {
            return Ok(year);
        }
    }
    Err(TableError::NoValidYear {
        column: aggregate.column.clone(),
        sentinel: aggregate.sentinel.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/emissions/year.rs"]
mod tests;
