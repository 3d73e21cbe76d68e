// src/tables/mod.rs

mod csv;
mod xlsx;

pub use self::csv::read_csv;

use crate::errors::AppResult;
use crate::models::table::Table;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento scrittura.
pub(crate) fn notify_write_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write a table in the requested format.
pub fn write_table(table: &Table, path: &Path, format: ExportFormat) -> AppResult<()> {
    match format {
        ExportFormat::Csv => self::csv::write_csv(table, path),
        ExportFormat::Xlsx => self::xlsx::write_xlsx(table, path),
    }
}
