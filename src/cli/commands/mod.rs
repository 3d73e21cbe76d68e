pub mod clean;
pub mod compare;
pub mod config;
pub mod merge;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write a diagnostics report as pretty JSON next to the tabular output.
pub(crate) fn write_json_report<T: Serialize>(path: &str, report: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Export(format!("report serialization: {}", e)))?;
    fs::write(Path::new(path), json)?;
    Ok(())
}
