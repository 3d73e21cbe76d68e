use chrono::NaiveDate;
use hrecon::core::expand::{Expander, Expansion, OpenEndedPolicy};
use hrecon::models::absence::{AbsenceRecord, SourceSchema};
use hrecon::models::daily::{Provenance, join_key};
use hrecon::models::table::Table;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const MAX_VALID: (i32, u32, u32) = (2262, 4, 11);

fn primary_table(rows: &[[&str; 5]]) -> Table {
    let columns = [
        "Personnel Number",
        "A/AType",
        "Start Date",
        "End Date",
        "Internal Note",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row.iter().map(|c| c.to_string()).collect());
    }
    table
}

fn preserved() -> Vec<String> {
    ["Personnel Number", "A/AType", "Start Date", "End Date"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn expander(table: &Table, policy: OpenEndedPolicy) -> Expander {
    Expander::new(
        table,
        &SourceSchema::default(),
        &preserved(),
        d(MAX_VALID.0, MAX_VALID.1, MAX_VALID.2),
        policy,
        "-",
    )
    .expect("build expander")
}

fn records(table: &Table) -> Vec<AbsenceRecord> {
    AbsenceRecord::from_table(table, &SourceSchema::default()).expect("parse records")
}

#[test]
fn test_single_day_expands_to_one_row() {
    let table = primary_table(&[["7", "AH01", "2024-06-15", "2024-06-15", "note"]]);
    let recs = records(&table);

    match expander(&table, OpenEndedPolicy::Drop).expand(&recs[0]) {
        Expansion::Days(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].join_key, "7_20240615");
            assert_eq!(rows[0].absence_date, Some(d(2024, 6, 15)));
            assert_eq!(rows[0].provenance, Provenance::Split);
        }
        other => panic!("expected Days, got {:?}", other),
    }
}

#[test]
fn test_multi_day_emits_one_row_per_calendar_day() {
    let table = primary_table(&[["100", "AS01", "2024-01-01", "2024-01-03", "note"]]);
    let recs = records(&table);

    match expander(&table, OpenEndedPolicy::Drop).expand(&recs[0]) {
        Expansion::Days(rows) => {
            assert_eq!(rows.len(), 3);
            let keys: Vec<&str> = rows.iter().map(|r| r.join_key.as_str()).collect();
            assert_eq!(keys, ["100_20240101", "100_20240102", "100_20240103"]);

            // each row is pinned to its own day
            let start_idx = table.column_index("Start Date").unwrap();
            let end_idx = table.column_index("End Date").unwrap();
            assert_eq!(rows[1].fields[start_idx], "2024-01-02");
            assert_eq!(rows[1].fields[end_idx], "2024-01-02");
        }
        other => panic!("expected Days, got {:?}", other),
    }
}

#[test]
fn test_month_boundary_has_no_gaps() {
    let table = primary_table(&[["9", "AS01", "2024-02-28", "2024-03-01", "x"]]);
    let recs = records(&table);

    match expander(&table, OpenEndedPolicy::Drop).expand(&recs[0]) {
        Expansion::Days(rows) => {
            // 2024 is a leap year: 28.02, 29.02, 01.03
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[1].join_key, "9_20240229");
        }
        other => panic!("expected Days, got {:?}", other),
    }
}

#[test]
fn test_non_preserved_fields_are_masked() {
    let table = primary_table(&[["7", "AH01", "2024-06-15", "2024-06-15", "secret"]]);
    let recs = records(&table);

    let Expansion::Days(rows) = expander(&table, OpenEndedPolicy::Drop).expand(&recs[0]) else {
        panic!("expected Days");
    };

    let note_idx = table.column_index("Internal Note").unwrap();
    assert_eq!(rows[0].fields[note_idx], "-");
    let emp_idx = table.column_index("Personnel Number").unwrap();
    assert_eq!(rows[0].fields[emp_idx], "7");
}

#[test]
fn test_missing_dates_are_malformed_not_errors() {
    let table = primary_table(&[
        ["1", "AS01", "", "2024-03-01", "x"],
        ["2", "AS01", "2024-03-01", "", "x"],
        ["3", "AS01", "not a date", "2024-03-01", "x"],
    ]);
    let recs = records(&table);
    let exp = expander(&table, OpenEndedPolicy::Drop);

    for rec in &recs {
        assert!(matches!(exp.expand(rec), Expansion::Malformed));
    }
}

#[test]
fn test_open_ended_dropped_by_default() {
    let table = primary_table(&[["55", "AS01", "2024-02-01", "9999-12-31", "x"]]);
    let recs = records(&table);

    match expander(&table, OpenEndedPolicy::Drop).expand(&recs[0]) {
        Expansion::Unbounded(None) => {}
        other => panic!("expected Unbounded(None), got {:?}", other),
    }
}

#[test]
fn test_open_ended_placeholder_policy() {
    let table = primary_table(&[["55", "AS01", "2024-02-01", "9999-12-31", "x"]]);
    let recs = records(&table);

    match expander(&table, OpenEndedPolicy::Placeholder).expand(&recs[0]) {
        Expansion::Unbounded(Some(row)) => {
            assert_eq!(row.provenance, Provenance::Original);
            assert_eq!(row.absence_date, None);
            // key comes from the start date
            assert_eq!(row.join_key, "55_20240201");
            // end date is nulled out
            let end_idx = table.column_index("End Date").unwrap();
            assert_eq!(row.fields[end_idx], "");
        }
        other => panic!("expected Unbounded(Some), got {:?}", other),
    }
}

#[test]
fn test_end_exactly_at_sentinel_still_expands() {
    let table = primary_table(&[["8", "AS01", "2262-04-10", "2262-04-11", "x"]]);
    let recs = records(&table);

    match expander(&table, OpenEndedPolicy::Drop).expand(&recs[0]) {
        Expansion::Days(rows) => assert_eq!(rows.len(), 2),
        other => panic!("expected Days, got {:?}", other),
    }
}

#[test]
fn test_join_key_format() {
    assert_eq!(join_key("12345", d(2024, 3, 5)), "12345_20240305");
}

#[test]
fn test_missing_schema_column_is_fatal() {
    let mut table = Table::new(vec!["Personnel Number".to_string(), "A/AType".to_string()]);
    table.push_row(vec!["1".to_string(), "AS01".to_string()]);

    let err = Expander::new(
        &table,
        &SourceSchema::default(),
        &preserved(),
        d(MAX_VALID.0, MAX_VALID.1, MAX_VALID.2),
        OpenEndedPolicy::Drop,
        "-",
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Start Date"), "message was: {msg}");
    assert!(msg.contains("End Date"), "message was: {msg}");
}
