//! Generic in-memory table: ordered columns plus rows of string cells.
//! Every extract (SAP, Workday, master) is loaded into one of these before
//! the core logic touches it; the core never reads files itself.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding or truncating it to the column count so every
    /// stored row has the same width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Resolve the given column names to indexes, failing with a
    /// SchemaMismatch that lists every missing column at once.
    pub fn require_columns(&self, names: &[&str]) -> AppResult<Vec<usize>> {
        let mut indexes = Vec::with_capacity(names.len());
        let mut missing = Vec::new();

        for name in names {
            match self.column_index(name) {
                Some(i) => indexes.push(i),
                None => missing.push((*name).to_string()),
            }
        }

        if missing.is_empty() {
            Ok(indexes)
        } else {
            Err(AppError::SchemaMismatch(missing.join(", ")))
        }
    }

    pub fn require_column(&self, name: &str) -> AppResult<usize> {
        Ok(self.require_columns(&[name])?[0])
    }

    /// Cell value at (row, col); empty string for out-of-range cells.
    pub fn value(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}
