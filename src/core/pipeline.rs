//! The reconciliation pipeline: filter → expand → reconcile → dedupe.
//!
//! Runs on whole in-memory tables, one stage to completion before the next,
//! and produces a fresh output table plus a diagnostics report. Neither
//! input table is mutated.

use crate::core::dedupe::{DedupePolicy, dedupe};
use crate::core::expand::{Expander, Expansion, OpenEndedPolicy};
use crate::core::reconcile::{SecondaryKeys, reconcile};
use crate::errors::AppResult;
use crate::models::absence::{AbsenceRecord, SecondarySchema, SourceSchema};
use crate::models::status::Status;
use crate::models::table::Table;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::Serialize;

/// Columns appended to the primary table's columns in the output.
pub const ABSENCE_DATE_COLUMN: &str = "Absence Date";
pub const KEY_COLUMN: &str = "Key";
pub const STATUS_COLUMN: &str = "Status";

/// Everything the compare pipeline needs, passed explicitly; the pipeline
/// never consults global state.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Absence-type codes to reconcile; empty keeps every type.
    pub absence_types: Vec<String>,
    /// Columns copied verbatim into expanded rows; all others are blanked.
    pub preserved_columns: Vec<String>,
    /// End dates beyond this sentinel mean "open-ended".
    pub max_valid_date: NaiveDate,
    pub open_ended: OpenEndedPolicy,
    pub dedupe: DedupePolicy,
    pub source_schema: SourceSchema,
    pub secondary_schema: SecondarySchema,
    pub sentinel: String,
}

/// Aggregate counts for one pipeline run. Recoverable anomalies land here,
/// never in an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompareReport {
    pub source_rows: usize,
    pub excluded_by_type: usize,
    pub skipped_malformed: usize,
    pub open_ended: usize,
    pub expanded_rows: usize,
    pub secondary_keys: usize,
    pub secondary_skipped: usize,
    pub duplicates_removed: usize,
    pub matched: usize,
    pub missing: usize,
    pub original: usize,
    pub output_rows: usize,
}

pub fn compare(
    primary: &Table,
    secondary: &Table,
    opts: &CompareOptions,
) -> AppResult<(Table, CompareReport)> {
    let mut report = CompareReport {
        source_rows: primary.len(),
        ..Default::default()
    };

    let keys = SecondaryKeys::from_table(secondary, &opts.secondary_schema)?;
    report.secondary_keys = keys.len();
    report.secondary_skipped = keys.skipped;

    let records = AbsenceRecord::from_table(primary, &opts.source_schema)?;
    let expander = Expander::new(
        primary,
        &opts.source_schema,
        &opts.preserved_columns,
        opts.max_valid_date,
        opts.open_ended,
        &opts.sentinel,
    )?;

    let mut daily = Vec::new();
    for record in &records {
        if !opts.absence_types.is_empty()
            && !opts.absence_types.iter().any(|t| t == &record.absence_type)
        {
            report.excluded_by_type += 1;
            continue;
        }

        match expander.expand(record) {
            Expansion::Malformed => report.skipped_malformed += 1,
            Expansion::Unbounded(placeholder) => {
                report.open_ended += 1;
                daily.extend(placeholder);
            }
            Expansion::Days(rows) => daily.extend(rows),
        }
    }
    report.expanded_rows = daily.len();

    let reconciled = reconcile(daily, &keys);
    let outcome = dedupe(reconciled, opts.dedupe);
    report.duplicates_removed = outcome.removed;

    let mut columns = primary.columns().to_vec();
    columns.push(ABSENCE_DATE_COLUMN.to_string());
    columns.push(KEY_COLUMN.to_string());
    columns.push(STATUS_COLUMN.to_string());

    let mut output = Table::new(columns);
    for row in outcome.rows {
        match row.status {
            Status::Matched => report.matched += 1,
            Status::Missing => report.missing += 1,
            Status::Original => report.original += 1,
        }

        let mut fields = row.daily.fields;
        fields.push(row.daily.absence_date.map(format_date).unwrap_or_default());
        fields.push(row.daily.join_key);
        fields.push(row.status.as_str().to_string());
        output.push_row(fields);
    }
    report.output_rows = output.len();

    Ok((output, report))
}
