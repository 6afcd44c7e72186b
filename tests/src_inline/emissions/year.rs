use super::*;
use crate::table::loader::read_table;

fn emissions(text: &str) -> Table {
    read_table(text.as_bytes(), "inline").expect("table")
}

#[test]
fn picks_newest_year_with_positive_total() {
    let table = emissions(
        "Country Name,Country Code,2010,2012,2014\n\
         France,FRA,1,2,\n\
         World,WLD,0,5.0,\n",
    );
    let year = latest_valid_year(&table, &AggregateRow::default()).expect("year");
    assert_eq!(year, 2012);
}

#[test]
fn ignores_non_year_headers() {
    let table = emissions(
        "Country Name,Country Code,Indicator,1960,20150,abcd\n\
         World,WLD,CO2,9.5,1,1\n",
    );
    let years: Vec<u32> = year_columns(&table).into_iter().map(|(y, _)| y).collect();
    assert_eq!(years, [1960]);
    assert_eq!(
        latest_valid_year(&table, &AggregateRow::default()).expect("year"),
        1960
    );
}

#[test]
fn no_valid_year_is_error() {
    let table = emissions(
        "Country Name,Country Code,2010,2011\n\
         France,FRA,3,4\n\
         World,WLD,0,\n",
    );
    match latest_valid_year(&table, &AggregateRow::default()) {
        Err(TableError::NoValidYear { column, sentinel }) => {
            assert_eq!(column, "Country Code");
            assert_eq!(sentinel, "WLD");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_aggregate_row_is_error() {
    let table = emissions("Country Name,Country Code,2010\nFrance,FRA,3\n");
    assert!(matches!(
        latest_valid_year(&table, &AggregateRow::default()),
        Err(TableError::NoValidYear { .. })
    ));
}

#[test]
fn unknown_aggregate_column_is_lookup_error() {
    let table = emissions("Name,Code,2010\nWorld,WLD,3\n");
    assert!(matches!(
        latest_valid_year(&table, &AggregateRow::default()),
        Err(TableError::UnknownColumn(_))
    ));
}

#[test]
fn non_numeric_total_is_error() {
    let table = emissions("Country Name,Country Code,2010\nWorld,WLD,n/a\n");
    assert!(matches!(
        latest_valid_year(&table, &AggregateRow::default()),
        Err(TableError::InvalidNumber { row: 1, .. })
    ));
}

#[test]
fn aggregate_total_defaults_to_zero() {
    let table = emissions("Country Name,Country Code,2010\nWorld,WLD,\n");
    let total = aggregate_total(&table, &AggregateRow::default(), "2010").expect("total");
    assert_eq!(total, 0.0);
}

#[test]
fn custom_sentinel() {
    let table = emissions("region,2019,2020\nall,7,0\neu,3,0\n");
    let aggregate = AggregateRow::new("region", "all");
    assert_eq!(latest_valid_year(&table, &aggregate).expect("year"), 2019);
}
