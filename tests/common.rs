#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hrc() -> Command {
    cargo_bin_cmd!("hrecon")
}

/// Path inside the system temp dir, with any leftover from a previous run
/// removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrecon.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture into the temp dir and return its path.
pub fn write_fixture(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write fixture");
    path
}

/// A --config path that does not exist, so every run uses the default
/// configuration regardless of the machine it runs on.
pub fn no_config() -> String {
    temp_path("no_config", "conf")
}

/// Small SAP extract: one three-day interval, one single day, one open-ended
/// interval and one row without an end date.
pub fn sap_fixture(name: &str) -> String {
    write_fixture(
        name,
        "Pers.No.,Personnel Number,CoCd,Start Date,End Date,A/AType,Internal Note\n\
         100,100,DE11,2024-01-01,2024-01-03,AS01,keep out\n\
         7,7,LU01,2024-06-15,2024-06-15,AH01,keep out\n\
         55,55,DE11,2024-02-01,9999-12-31,AS01,open ended\n\
         66,66,DE11,,2024-03-01,AS01,malformed\n",
    )
}

/// Workday extract matching days 1 and 3 of employee 100 and the single day
/// of employee 7.
pub fn wd_fixture(name: &str) -> String {
    write_fixture(
        name,
        "Employee ID,Time Off date\n\
         100,2024-01-01\n\
         100,2024-01-03\n\
         7,2024-06-15\n",
    )
}
