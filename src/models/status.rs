//! Classification assigned to every reconciled per-day row.

use serde::Serialize;
use std::fmt;

/// Closed set of reconciliation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The day's join key was found in the secondary table.
    Matched,
    /// The day's join key was not found in the secondary table.
    Missing,
    /// Un-split placeholder row (open-ended absence); exempt from matching.
    Original,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Matched => "OK",
            Status::Missing => "Missing",
            Status::Original => "ORIGINAL",
        }
    }

    /// Sort rank used by deduplication: placeholder rows sort after
    /// day-expanded rows, so they lose ties on a shared join key.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Status::Matched | Status::Missing => 0,
            Status::Original => 1,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
