//! Per-day records produced by interval expansion.

use crate::models::status::Status;
use chrono::NaiveDate;

/// How a per-day row came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Synthetic row for one calendar day of the source interval.
    Split,
    /// The un-split source record itself (open-ended placeholder).
    Original,
}

/// One expanded row: a masked copy of the source row pinned to a single
/// calendar day, carrying the deterministic join key.
#[derive(Debug, Clone)]
pub struct DailyRecord {
    /// Source-aligned cells: preserved columns copied, everything else set
    /// to the sentinel, start/end overwritten with the day's date.
    pub fields: Vec<String>,
    /// The day this row stands for; `None` for placeholder rows.
    pub absence_date: Option<NaiveDate>,
    pub join_key: String,
    pub provenance: Provenance,
}

/// Deterministic employee+day key: `{employee}_{YYYYMMDD}`.
pub fn join_key(employee_id: &str, day: NaiveDate) -> String {
    format!("{}_{}", employee_id, day.format("%Y%m%d"))
}

/// A `DailyRecord` with its reconciliation outcome attached.
#[derive(Debug, Clone)]
pub struct ReconciliationRow {
    pub daily: DailyRecord,
    pub status: Status,
}
