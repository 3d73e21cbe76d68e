//! Join-key deduplication of reconciled rows.

use crate::models::daily::ReconciliationRow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tie-break rule when several rows share a join key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DedupePolicy {
    /// Reference policy: day-expanded rows beat ORIGINAL placeholders for
    /// the same key (stable sort by status rank, then first wins).
    #[default]
    StatusPriority,
    /// Legacy policy: first occurrence in input order wins, regardless of
    /// status.
    InsertionOrder,
}

#[derive(Debug)]
pub struct DedupeOutcome {
    pub rows: Vec<ReconciliationRow>,
    /// How many duplicate rows were discarded.
    pub removed: usize,
}

/// Collapse rows sharing a join key down to one. A placeholder and a
/// day-expanded child legitimately collide on the interval's first day; the
/// reference policy keeps the more granular, reconciled row. When every row
/// for a key is a placeholder, the placeholder survives.
pub fn dedupe(mut rows: Vec<ReconciliationRow>, policy: DedupePolicy) -> DedupeOutcome {
    if policy == DedupePolicy::StatusPriority {
        rows.sort_by_key(|r| r.status.sort_rank());
    }

    let before = rows.len();
    let mut seen = HashSet::with_capacity(before);
    rows.retain(|r| seen.insert(r.daily.join_key.clone()));

    DedupeOutcome {
        removed: before - rows.len(),
        rows,
    }
}
