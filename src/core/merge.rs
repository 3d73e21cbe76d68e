//! Incremental merge: append a new extract batch to the accumulating master
//! table.
//!
//! The master's column set wins; batch-only columns are dropped, except for
//! the optional classification column which is kept from whichever side has
//! it. Master rows come first, so on a duplicate composite key the
//! pre-existing master row always survives.

use crate::errors::AppResult;
use crate::models::absence::SourceSchema;
use crate::models::table::Table;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Organizational-code allowlist; empty disables the filter.
    pub company_codes: Vec<String>,
    pub company_code_column: String,
    /// Optional extra column carried over when present in either input.
    pub classification_column: Option<String>,
    pub schema: SourceSchema,
    pub sentinel: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub master_rows: usize,
    pub batch_rows: usize,
    pub filtered_out: usize,
    pub duplicates_removed: usize,
    pub total: usize,
}

pub fn merge(master: &Table, batch: &Table, opts: &MergeOptions) -> AppResult<(Table, MergeReport)> {
    // Output column set: the master's, plus the classification column when
    // either side carries it.
    let mut columns: Vec<String> = master.columns().to_vec();
    if let Some(class_col) = &opts.classification_column
        && !master.has_column(class_col)
        && batch.has_column(class_col)
    {
        columns.push(class_col.clone());
    }

    let mut merged = Table::new(columns.clone());
    for row in aligned_rows(master, &columns, &opts.sentinel) {
        merged.push_row(row);
    }
    for row in aligned_rows(batch, &columns, &opts.sentinel) {
        merged.push_row(row);
    }

    let filtered_out = filter_company_codes(&mut merged, opts)?;
    let duplicates_removed = dedupe_composite_key(&mut merged, opts)?;

    let report = MergeReport {
        master_rows: master.len(),
        batch_rows: batch.len(),
        filtered_out,
        duplicates_removed,
        total: merged.len(),
    };

    Ok((merged, report))
}

/// Project a table's rows onto the output column order, filling columns the
/// source does not have with the sentinel.
fn aligned_rows<'a>(
    source: &'a Table,
    columns: &'a [String],
    sentinel: &'a str,
) -> impl Iterator<Item = Vec<String>> + 'a {
    let mapping: Vec<Option<usize>> = columns.iter().map(|c| source.column_index(c)).collect();

    source.rows().iter().map(move |row| {
        mapping
            .iter()
            .map(|idx| match idx {
                Some(i) => row[*i].clone(),
                None => sentinel.to_string(),
            })
            .collect()
    })
}

/// Drop rows whose company code is not in the allowlist. Returns the number
/// of rows removed; a no-op when the allowlist is empty.
fn filter_company_codes(table: &mut Table, opts: &MergeOptions) -> AppResult<usize> {
    if opts.company_codes.is_empty() {
        return Ok(0);
    }
    let col = table.require_column(&opts.company_code_column)?;

    let before = table.len();
    let allowed: HashSet<&str> = opts.company_codes.iter().map(String::as_str).collect();

    let filtered: Vec<Vec<String>> = table
        .rows()
        .iter()
        .filter(|row| allowed.contains(row[col].trim()))
        .cloned()
        .collect();

    let mut out = Table::new(table.columns().to_vec());
    for row in filtered {
        out.push_row(row);
    }
    *table = out;

    Ok(before - table.len())
}

/// Deduplicate on employee id + start date + absence type, first occurrence
/// wins. Master rows precede batch rows, so the master is never the side
/// that gets dropped.
fn dedupe_composite_key(table: &mut Table, opts: &MergeOptions) -> AppResult<usize> {
    let idx = table.require_columns(&[
        &opts.schema.merge_employee,
        &opts.schema.start,
        &opts.schema.absence_type,
    ])?;
    let (emp, start, atype) = (idx[0], idx[1], idx[2]);

    let before = table.len();
    let mut seen = HashSet::with_capacity(before);

    let kept: Vec<Vec<String>> = table
        .rows()
        .iter()
        .filter(|row| {
            let key = format!(
                "{}|{}|{}",
                row[emp].trim(),
                row[start].trim(),
                row[atype].trim()
            );
            seen.insert(key)
        })
        .cloned()
        .collect();

    let mut out = Table::new(table.columns().to_vec());
    for row in kept {
        out.push_row(row);
    }
    *table = out;

    Ok(before - table.len())
}
