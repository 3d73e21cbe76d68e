//! Typed views over the raw extract tables.
//!
//! The extracts arrive as free-form tables; only a handful of columns carry
//! meaning for the core logic. The schema structs name those columns (they
//! are configurable because the upstream systems rename headers between
//! export variants), and `AbsenceRecord` is the parsed view of one
//! source-of-record row.

use crate::errors::AppResult;
use crate::models::table::Table;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names of the source-of-record (SAP-like) extract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSchema {
    pub employee: String,
    pub absence_type: String,
    pub start: String,
    pub end: String,
    /// Employee column used in the merge composite key (the SAP export
    /// carries the personnel number twice under different headers).
    pub merge_employee: String,
}

impl Default for SourceSchema {
    fn default() -> Self {
        Self {
            employee: "Personnel Number".to_string(),
            absence_type: "A/AType".to_string(),
            start: "Start Date".to_string(),
            end: "End Date".to_string(),
            merge_employee: "Pers.No.".to_string(),
        }
    }
}

/// Column names of the secondary (Workday-like) extract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondarySchema {
    pub employee: String,
    pub date: String,
}

impl Default for SecondarySchema {
    fn default() -> Self {
        Self {
            employee: "Employee ID".to_string(),
            date: "Time Off date".to_string(),
        }
    }
}

/// One parsed source-of-record row. Dates that are empty or unparseable are
/// kept as `None`; the expander decides what to do with them.
#[derive(Debug, Clone)]
pub struct AbsenceRecord {
    pub employee_id: String,
    pub absence_type: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// The full source row, untouched; field preservation and masking happen
    /// at expansion time.
    pub fields: Vec<String>,
}

impl AbsenceRecord {
    /// Parse every row of a primary table. Fails fast when the schema
    /// columns are absent; per-row date problems never fail.
    pub fn from_table(table: &Table, schema: &SourceSchema) -> AppResult<Vec<AbsenceRecord>> {
        let idx = table.require_columns(&[
            &schema.employee,
            &schema.absence_type,
            &schema.start,
            &schema.end,
        ])?;
        let (emp, atype, start, end) = (idx[0], idx[1], idx[2], idx[3]);

        let records = table
            .rows()
            .iter()
            .map(|row| AbsenceRecord {
                employee_id: row[emp].trim().to_string(),
                absence_type: row[atype].trim().to_string(),
                start: parse_date(&row[start]),
                end: parse_date(&row[end]),
                fields: row.clone(),
            })
            .collect();

        Ok(records)
    }
}
