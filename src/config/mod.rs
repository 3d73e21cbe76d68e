//! YAML configuration file.
//!
//! Holds the business constants of the reconciliation (allowlists, schema
//! column names, the open-ended sentinel) so they can be changed without a
//! rebuild. The defaults reproduce the values the HR integration team has
//! been running with. Core functions never read this struct directly; the
//! command handlers convert it into explicit option structs.

use crate::core::clean::CleanOptions;
use crate::core::dedupe::DedupePolicy;
use crate::core::expand::OpenEndedPolicy;
use crate::core::merge::MergeOptions;
use crate::core::pipeline::CompareOptions;
use crate::errors::{AppError, AppResult};
use crate::models::absence::{SecondarySchema, SourceSchema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Absence-type codes included in the comparison; empty keeps all.
    pub absence_types: Vec<String>,
    /// Columns copied into expanded rows; everything else is blanked.
    pub preserved_columns: Vec<String>,
    /// Company codes kept by the merge filter; empty disables it.
    pub company_codes: Vec<String>,
    pub company_code_column: String,
    /// Extra column carried through a merge when either side has it;
    /// empty disables the carry-over.
    pub classification_column: String,
    /// End dates after this are treated as "open-ended".
    pub max_valid_date: NaiveDate,
    pub open_ended: OpenEndedPolicy,
    pub dedupe: DedupePolicy,
    /// Placeholder written into non-preserved and missing cells.
    pub sentinel: String,
    pub source_schema: SourceSchema,
    pub secondary_schema: SecondarySchema,
    pub clean: CleanConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    pub employment_status: String,
    pub employment_status_column: String,
    pub time_off_type_column: String,
    pub date_column: String,
    pub countries: Vec<String>,
    pub country_column: String,
    /// Rows dated more than this many months ahead are dropped.
    pub horizon_months: u32,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            employment_status: "3".to_string(),
            employment_status_column: "Employment Status ID".to_string(),
            time_off_type_column: "Time Off type".to_string(),
            date_column: "Time Off date".to_string(),
            countries: vec![
                "Netherlands".to_string(),
                "Germany".to_string(),
                "Luxembourg".to_string(),
            ],
            country_column: "Work Location Country".to_string(),
            horizon_months: 3,
        }
    }
}

fn default_preserved_columns() -> Vec<String> {
    [
        "Pers.No.",
        "Personnel Number",
        "EEGrp",
        "Employee Group",
        "S",
        "Employment Status",
        "CoCd",
        "Company Code",
        "PA",
        "Personnel Area",
        "ESgrp",
        "Employee Subgroup",
        "Start Date",
        "End Date",
        "Changed by",
        "Start",
        "End time",
        "A/AType",
        "Attendance or Absence Type",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_company_codes() -> Vec<String> {
    [
        "DE11", "DE14", "DE15", "DE19", "DE20", "DE43", "DE78", "DE84", "DE85", "DE86", "DE91",
        "DE92", "DE93", "DE94", "HQ01", "HQ02", "HQ06", "HQ76", "HQ78", "HQ79", "HQ80", "HQ81",
        "HQ82", "HQ83", "HQ86", "HQ87", "HQ93", "HQ95", "HQ96", "LU01", "NL11", "NL84",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_valid_date() -> NaiveDate {
    // Largest timestamp the upstream export can represent; anything later
    // is the "no defined end" sentinel.
    NaiveDate::from_ymd_opt(2262, 4, 11).unwrap_or(NaiveDate::MAX)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            absence_types: vec![
                "AS01".to_string(),
                "AX04".to_string(),
                "AS03".to_string(),
                "AH01".to_string(),
            ],
            preserved_columns: default_preserved_columns(),
            company_codes: default_company_codes(),
            company_code_column: "CoCd".to_string(),
            classification_column: "Origin".to_string(),
            max_valid_date: default_max_valid_date(),
            open_ended: OpenEndedPolicy::default(),
            dedupe: DedupePolicy::default(),
            sentinel: "-".to_string(),
            source_schema: SourceSchema::default(),
            secondary_schema: SecondarySchema::default(),
            clean: CleanConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hrecon")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hrecon")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hrecon.conf")
    }

    /// Load configuration from the given path (or the standard location),
    /// falling back to defaults when no file exists.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration as YAML to the given path (or the standard
    /// location), creating the directory if needed.
    pub fn save(&self, path: Option<&str>) -> AppResult<PathBuf> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::config_file);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialize: {}", e)))?;
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            absence_types: self.absence_types.clone(),
            preserved_columns: self.preserved_columns.clone(),
            max_valid_date: self.max_valid_date,
            open_ended: self.open_ended,
            dedupe: self.dedupe,
            source_schema: self.source_schema.clone(),
            secondary_schema: self.secondary_schema.clone(),
            sentinel: self.sentinel.clone(),
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            company_codes: self.company_codes.clone(),
            company_code_column: self.company_code_column.clone(),
            classification_column: if self.classification_column.is_empty() {
                None
            } else {
                Some(self.classification_column.clone())
            },
            schema: self.source_schema.clone(),
            sentinel: self.sentinel.clone(),
        }
    }

    pub fn clean_options(&self, cutoff: Option<NaiveDate>) -> CleanOptions {
        CleanOptions {
            employment_status: if self.clean.employment_status.is_empty() {
                None
            } else {
                Some(self.clean.employment_status.clone())
            },
            employment_status_column: self.clean.employment_status_column.clone(),
            require_time_off_type: !self.clean.time_off_type_column.is_empty(),
            time_off_type_column: self.clean.time_off_type_column.clone(),
            cutoff,
            date_column: self.clean.date_column.clone(),
            countries: self.clean.countries.clone(),
            country_column: self.clean.country_column.clone(),
        }
    }
}
