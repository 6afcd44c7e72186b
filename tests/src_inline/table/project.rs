use super::*;
use crate::table::loader::read_table;

#[test]
fn projection_reorders_and_keeps_rows() {
    let table = read_table("a,b,c\n1,2,3\n4,5,6\n7,8,9\n".as_bytes(), "inline").expect("table");
    let projected = project_columns(&table, &["c", "a"]).expect("project");

    assert_eq!(projected.headers(), ["c", "a"]);
    assert_eq!(projected.n_rows(), table.n_rows());
    let firsts: Vec<&str> = projected.column("a").expect("column").collect();
    assert_eq!(firsts, ["1", "4", "7"]);
    assert_eq!(projected.rows()[2], ["9", "7"]);
}

#[test]
fn unknown_column_is_lookup_error() {
    let table = read_table("a,b\n1,2\n".as_bytes(), "inline").expect("table");
    let err = project_columns(&table, &["a", "z"]).unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn(name) if name == "z"));
}
