use super::*;
use crate::table::loader::{load_table, read_table};
use std::fs;
use tempfile::tempdir;

#[test]
fn quoting_follows_csv_rules() {
    let table = Table::new(
        vec!["name".to_string(), "note".to_string()],
        vec![
            vec!["Korea, Rep.".to_string(), "say \"hi\"".to_string()],
            vec!["plain".to_string(), "two\nlines".to_string()],
        ],
    )
    .expect("table");

    let mut out = Vec::new();
    export_to_writer(&table, &mut out).expect("export");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text,
        "name,note\n\"Korea, Rep.\",\"say \"\"hi\"\"\"\nplain,\"two\nlines\"\n"
    );

    let reread = read_table(text.as_bytes(), "inline").expect("reread");
    assert_eq!(reread, table);
}

#[test]
fn export_overwrites_existing_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale,content\nx,y\nz,w\n").expect("write file");

    let table = read_table("a\n1\n".as_bytes(), "inline").expect("table");
    export_to_path(&table, &path).expect("export");

    assert_eq!(fs::read_to_string(&path).expect("read"), "a\n1\n");
    assert_eq!(load_table(&path).expect("load"), table);
}

#[test]
fn export_into_missing_dir_is_file_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nope").join("out.csv");
    let table = read_table("a\n1\n".as_bytes(), "inline").expect("table");
    let err = export_to_path(&table, &path).unwrap_err();
    assert!(matches!(err, TableError::File { .. }));
}
