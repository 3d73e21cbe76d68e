//! Secondary-extract cleanup: the row filters applied to the raw Workday
//! export before it is usable for comparison or merging.
//!
//! Every filter is optional (empty configuration disables it) and reports
//! how many rows it removed. An enabled filter whose column is missing from
//! the input is a schema error, not a silent no-op.

use crate::errors::AppResult;
use crate::models::table::Table;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Keep only rows whose employment-status cell equals this value.
    pub employment_status: Option<String>,
    pub employment_status_column: String,
    /// Drop rows with an empty time-off-type cell.
    pub require_time_off_type: bool,
    pub time_off_type_column: String,
    /// Drop rows dated after the cutoff (and rows with unparseable dates).
    pub cutoff: Option<NaiveDate>,
    pub date_column: String,
    /// Keep only rows from these countries; empty keeps all.
    pub countries: Vec<String>,
    pub country_column: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    pub input_rows: usize,
    pub removed_by_status: usize,
    pub removed_empty_type: usize,
    pub removed_after_cutoff: usize,
    pub unparseable_dates: usize,
    pub removed_by_country: usize,
    pub output_rows: usize,
}

pub fn clean(input: &Table, opts: &CleanOptions) -> AppResult<(Table, CleanReport)> {
    let mut report = CleanReport {
        input_rows: input.len(),
        ..Default::default()
    };

    let status_col = match &opts.employment_status {
        Some(_) => Some(input.require_column(&opts.employment_status_column)?),
        None => None,
    };
    let type_col = if opts.require_time_off_type {
        Some(input.require_column(&opts.time_off_type_column)?)
    } else {
        None
    };
    let date_col = match opts.cutoff {
        Some(_) => Some(input.require_column(&opts.date_column)?),
        None => None,
    };
    let country_col = if opts.countries.is_empty() {
        None
    } else {
        Some(input.require_column(&opts.country_column)?)
    };
    let countries: HashSet<&str> = opts.countries.iter().map(String::as_str).collect();

    let mut output = Table::new(input.columns().to_vec());

    for row in input.rows() {
        if let (Some(col), Some(wanted)) = (status_col, &opts.employment_status)
            && row[col].trim() != wanted.as_str()
        {
            report.removed_by_status += 1;
            continue;
        }

        if let Some(col) = type_col
            && row[col].trim().is_empty()
        {
            report.removed_empty_type += 1;
            continue;
        }

        if let (Some(col), Some(cutoff)) = (date_col, opts.cutoff) {
            match parse_date(&row[col]) {
                Some(d) if d <= cutoff => {}
                Some(_) => {
                    report.removed_after_cutoff += 1;
                    continue;
                }
                None => {
                    report.unparseable_dates += 1;
                    continue;
                }
            }
        }

        if let Some(col) = country_col
            && !countries.contains(row[col].trim())
        {
            report.removed_by_country += 1;
            continue;
        }

        output.push_row(row.clone());
    }

    report.output_rows = output.len();
    Ok((output, report))
}
