//! Interval expansion: turn one absence interval into per-day records.
//!
//! Each source record spans an inclusive [start, end] date range. Expansion
//! emits one row per calendar day in that range, each carrying the
//! employee+day join key that the reconciler matches against the secondary
//! extract. Columns outside the preserved allowlist are blanked to the
//! sentinel so the comparison only ever trusts fields we copied on purpose.

use crate::errors::AppResult;
use crate::models::absence::{AbsenceRecord, SourceSchema};
use crate::models::daily::{DailyRecord, Provenance, join_key};
use crate::models::table::Table;
use crate::utils::date::{days_in_range, format_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What to do with records whose end date lies beyond the max-valid-date
/// sentinel (the upstream system's encoding for "no defined end").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OpenEndedPolicy {
    /// Exclude the record from the output entirely.
    #[default]
    Drop,
    /// Emit a single un-split placeholder row with an empty end date.
    Placeholder,
}

/// Outcome of expanding one record.
#[derive(Debug)]
pub enum Expansion {
    /// Start or end date missing; the record is skipped, not an error.
    Malformed,
    /// End date beyond the sentinel. Carries the placeholder row when the
    /// policy asks for one.
    Unbounded(Option<DailyRecord>),
    /// One row per calendar day of the interval.
    Days(Vec<DailyRecord>),
}

#[derive(Debug)]
pub struct Expander {
    /// Per-column flag: copy the source value or blank it to the sentinel.
    preserved: Vec<bool>,
    start_idx: usize,
    end_idx: usize,
    max_valid_date: NaiveDate,
    policy: OpenEndedPolicy,
    sentinel: String,
}

impl Expander {
    pub fn new(
        table: &Table,
        schema: &SourceSchema,
        preserved_columns: &[String],
        max_valid_date: NaiveDate,
        policy: OpenEndedPolicy,
        sentinel: &str,
    ) -> AppResult<Self> {
        let idx = table.require_columns(&[&schema.start, &schema.end])?;

        let preserved = table
            .columns()
            .iter()
            .map(|c| preserved_columns.iter().any(|p| p == c))
            .collect();

        Ok(Self {
            preserved,
            start_idx: idx[0],
            end_idx: idx[1],
            max_valid_date,
            policy,
            sentinel: sentinel.to_string(),
        })
    }

    pub fn expand(&self, record: &AbsenceRecord) -> Expansion {
        let (start, end) = match (record.start, record.end) {
            (Some(s), Some(e)) => (s, e),
            _ => return Expansion::Malformed,
        };

        if end > self.max_valid_date {
            let placeholder = match self.policy {
                OpenEndedPolicy::Drop => None,
                OpenEndedPolicy::Placeholder => Some(self.placeholder_row(record, start)),
            };
            return Expansion::Unbounded(placeholder);
        }

        let rows = days_in_range(start, end)
            .into_iter()
            .map(|day| self.split_row(record, day))
            .collect();

        Expansion::Days(rows)
    }

    /// Masked copy of the source row: preserved columns keep their value,
    /// everything else becomes the sentinel.
    fn masked_fields(&self, record: &AbsenceRecord) -> Vec<String> {
        record
            .fields
            .iter()
            .zip(&self.preserved)
            .map(|(value, keep)| {
                if *keep {
                    value.clone()
                } else {
                    self.sentinel.clone()
                }
            })
            .collect()
    }

    fn split_row(&self, record: &AbsenceRecord, day: NaiveDate) -> DailyRecord {
        let mut fields = self.masked_fields(record);
        fields[self.start_idx] = format_date(day);
        fields[self.end_idx] = format_date(day);

        DailyRecord {
            fields,
            absence_date: Some(day),
            join_key: join_key(&record.employee_id, day),
            provenance: Provenance::Split,
        }
    }

    fn placeholder_row(&self, record: &AbsenceRecord, start: NaiveDate) -> DailyRecord {
        let mut fields = self.masked_fields(record);
        fields[self.end_idx] = String::new();

        DailyRecord {
            fields,
            absence_date: None,
            join_key: join_key(&record.employee_id, start),
            provenance: Provenance::Original,
        }
    }
}
