use crate::tables::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hrecon
/// CLI application to reconcile SAP and Workday absence extracts
#[derive(Parser)]
#[command(
    name = "hrecon",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile SAP and Workday absence extracts and maintain a merged absence master table",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand SAP absence intervals day by day and classify each day
    /// against the Workday extract
    Compare {
        /// SAP (source-of-record) extract, CSV
        #[arg(long, value_name = "FILE")]
        sap: String,

        /// Workday extract, CSV
        #[arg(long, value_name = "FILE")]
        wd: String,

        /// Output file for the classified rows
        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Write the diagnostics summary as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<String>,

        /// Emit a placeholder row for open-ended absences instead of
        /// dropping them
        #[arg(long = "keep-open-ended")]
        keep_open_ended: bool,

        /// Deduplicate by input order instead of preferring day-expanded
        /// rows over placeholders
        #[arg(long = "legacy-dedupe")]
        legacy_dedupe: bool,
    },

    /// Append a new extract batch to the master table, filter by company
    /// code and drop duplicate absences
    Merge {
        /// Accumulated master table, CSV
        #[arg(long, value_name = "FILE")]
        master: String,

        /// New batch to append, CSV
        #[arg(long, value_name = "FILE")]
        batch: String,

        /// Output file for the merged table
        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Write the merge summary as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<String>,
    },

    /// Clean a raw Workday extract (status, type, horizon and country
    /// filters)
    Clean {
        /// Raw Workday extract, CSV
        #[arg(long, value_name = "FILE")]
        input: String,

        /// Output file for the cleaned table
        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Keep rows up to this date (YYYY-MM-DD) instead of the configured
        /// horizon
        #[arg(long, value_name = "DATE")]
        cutoff: Option<String>,

        /// Write the cleanup summary as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,
    },
}
