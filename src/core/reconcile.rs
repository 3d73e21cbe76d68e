//! Key reconciliation: classify expanded per-day rows against the secondary
//! extract's set of employee+day keys.

use crate::errors::AppResult;
use crate::models::absence::SecondarySchema;
use crate::models::daily::{DailyRecord, Provenance, ReconciliationRow, join_key};
use crate::models::status::Status;
use crate::models::table::Table;
use crate::utils::date::parse_date;
use std::collections::HashSet;

/// Read-only lookup set of join keys built once from the secondary table.
#[derive(Debug, Default)]
pub struct SecondaryKeys {
    keys: HashSet<String>,
    /// Rows whose date column could not be parsed and were left out.
    pub skipped: usize,
}

impl SecondaryKeys {
    pub fn from_table(table: &Table, schema: &SecondarySchema) -> AppResult<Self> {
        let idx = table.require_columns(&[&schema.employee, &schema.date])?;
        let (emp, date) = (idx[0], idx[1]);

        let mut keys = HashSet::with_capacity(table.len());
        let mut skipped = 0usize;

        for row in table.rows() {
            match parse_date(&row[date]) {
                Some(d) => {
                    keys.insert(join_key(row[emp].trim(), d));
                }
                None => skipped += 1,
            }
        }

        Ok(Self { keys, skipped })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Attach a status to every expanded row. Placeholder rows keep their
/// ORIGINAL classification no matter what the secondary table contains;
/// every other row is matched by exact join-key equality.
pub fn reconcile(rows: Vec<DailyRecord>, keys: &SecondaryKeys) -> Vec<ReconciliationRow> {
    rows.into_iter()
        .map(|daily| {
            let status = match daily.provenance {
                Provenance::Original => Status::Original,
                Provenance::Split => {
                    if keys.contains(&daily.join_key) {
                        Status::Matched
                    } else {
                        Status::Missing
                    }
                }
            };
            ReconciliationRow { daily, status }
        })
        .collect()
}
