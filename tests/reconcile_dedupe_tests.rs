use hrecon::core::dedupe::{DedupePolicy, dedupe};
use hrecon::core::reconcile::{SecondaryKeys, reconcile};
use hrecon::models::absence::SecondarySchema;
use hrecon::models::daily::{DailyRecord, Provenance, ReconciliationRow};
use hrecon::models::status::Status;
use hrecon::models::table::Table;
use chrono::NaiveDate;

fn secondary_table(rows: &[(&str, &str)]) -> Table {
    let mut table = Table::new(vec![
        "Employee ID".to_string(),
        "Time Off date".to_string(),
    ]);
    for (emp, date) in rows {
        table.push_row(vec![emp.to_string(), date.to_string()]);
    }
    table
}

fn daily(key: &str, provenance: Provenance) -> DailyRecord {
    DailyRecord {
        fields: vec!["x".to_string()],
        absence_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        join_key: key.to_string(),
        provenance,
    }
}

fn row(key: &str, status: Status) -> ReconciliationRow {
    let provenance = if status == Status::Original {
        Provenance::Original
    } else {
        Provenance::Split
    };
    ReconciliationRow {
        daily: daily(key, provenance),
        status,
    }
}

#[test]
fn test_reconcile_matches_by_exact_key() {
    let keys = SecondaryKeys::from_table(
        &secondary_table(&[("100", "2024-01-01"), ("100", "2024-01-03")]),
        &SecondarySchema::default(),
    )
    .unwrap();
    assert_eq!(keys.len(), 2);

    let rows = reconcile(
        vec![
            daily("100_20240101", Provenance::Split),
            daily("100_20240102", Provenance::Split),
            daily("100_20240103", Provenance::Split),
        ],
        &keys,
    );

    let statuses: Vec<Status> = rows.iter().map(|r| r.status).collect();
    assert_eq!(statuses, [Status::Matched, Status::Missing, Status::Matched]);
}

#[test]
fn test_reconcile_never_overwrites_original() {
    // The placeholder's key IS present in the secondary table; it must stay
    // ORIGINAL anyway.
    let keys = SecondaryKeys::from_table(
        &secondary_table(&[("55", "2024-02-01")]),
        &SecondarySchema::default(),
    )
    .unwrap();

    let rows = reconcile(vec![daily("55_20240201", Provenance::Original)], &keys);
    assert_eq!(rows[0].status, Status::Original);
}

#[test]
fn test_secondary_rows_with_bad_dates_are_counted() {
    let keys = SecondaryKeys::from_table(
        &secondary_table(&[("1", "2024-01-01"), ("2", "garbage"), ("3", "")]),
        &SecondarySchema::default(),
    )
    .unwrap();

    assert_eq!(keys.len(), 1);
    assert_eq!(keys.skipped, 2);
}

#[test]
fn test_secondary_missing_columns_fail() {
    let table = Table::new(vec!["Employee ID".to_string()]);
    let err = SecondaryKeys::from_table(&table, &SecondarySchema::default()).unwrap_err();
    assert!(err.to_string().contains("Time Off date"));
}

#[test]
fn test_dedupe_prefers_day_expanded_over_original() {
    // Placeholder first in input order; status priority must still pick the
    // day-expanded row.
    let rows = vec![
        row("55_20240201", Status::Original),
        row("55_20240201", Status::Missing),
        row("55_20240202", Status::Matched),
    ];

    let outcome = dedupe(rows, DedupePolicy::StatusPriority);
    assert_eq!(outcome.removed, 1);
    assert_eq!(outcome.rows.len(), 2);

    let kept: Vec<(&str, Status)> = outcome
        .rows
        .iter()
        .map(|r| (r.daily.join_key.as_str(), r.status))
        .collect();
    assert!(kept.contains(&("55_20240201", Status::Missing)));
    assert!(kept.contains(&("55_20240202", Status::Matched)));
}

#[test]
fn test_dedupe_keeps_original_when_no_alternative() {
    let rows = vec![
        row("55_20240201", Status::Original),
        row("55_20240201", Status::Original),
    ];

    let outcome = dedupe(rows, DedupePolicy::StatusPriority);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].status, Status::Original);
    assert_eq!(outcome.removed, 1);
}

#[test]
fn test_dedupe_output_has_unique_keys() {
    let rows = vec![
        row("a_20240101", Status::Matched),
        row("a_20240101", Status::Missing),
        row("b_20240101", Status::Missing),
        row("a_20240101", Status::Original),
    ];

    let outcome = dedupe(rows, DedupePolicy::StatusPriority);
    let mut keys: Vec<&str> = outcome.rows.iter().map(|r| r.daily.join_key.as_str()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), outcome.rows.len());
}

#[test]
fn test_legacy_policy_keeps_first_occurrence() {
    let rows = vec![
        row("55_20240201", Status::Original),
        row("55_20240201", Status::Missing),
    ];

    let outcome = dedupe(rows, DedupePolicy::InsertionOrder);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].status, Status::Original);
}

#[test]
fn test_dedupe_preserves_order_of_survivors() {
    let rows = vec![
        row("a_20240101", Status::Matched),
        row("b_20240101", Status::Missing),
        row("c_20240101", Status::Matched),
    ];

    let outcome = dedupe(rows, DedupePolicy::StatusPriority);
    let keys: Vec<&str> = outcome.rows.iter().map(|r| r.daily.join_key.as_str()).collect();
    assert_eq!(keys, ["a_20240101", "b_20240101", "c_20240101"]);
    assert_eq!(outcome.removed, 0);
}
