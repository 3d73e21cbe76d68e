use crate::cli::commands::write_json_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dedupe::DedupePolicy;
use crate::core::expand::OpenEndedPolicy;
use crate::core::pipeline::compare;
use crate::errors::AppResult;
use crate::tables::{read_csv, write_table};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compare {
        sap,
        wd,
        out,
        format,
        report,
        keep_open_ended,
        legacy_dedupe,
    } = cmd
    {
        info("Loading input files...");
        let primary = read_csv(Path::new(sap))?;
        let secondary = read_csv(Path::new(wd))?;

        let mut opts = cfg.compare_options();
        if *keep_open_ended {
            opts.open_ended = OpenEndedPolicy::Placeholder;
        }
        if *legacy_dedupe {
            opts.dedupe = DedupePolicy::InsertionOrder;
        }

        let (table, summary) = compare(&primary, &secondary, &opts)?;

        info(format!(
            "SAP rows: {} ({} excluded by absence type)",
            summary.source_rows, summary.excluded_by_type
        ));
        info(format!(
            "Workday keys: {} ({} rows skipped)",
            summary.secondary_keys, summary.secondary_skipped
        ));
        if summary.skipped_malformed > 0 {
            warning(format!(
                "Skipped {} record(s) without start or end date",
                summary.skipped_malformed
            ));
        }
        if summary.open_ended > 0 {
            warning(format!(
                "Open-ended interval(s): {}",
                summary.open_ended
            ));
        }
        info(format!(
            "Expanded {} day row(s), removed {} duplicate(s)",
            summary.expanded_rows, summary.duplicates_removed
        ));
        success(format!(
            "Result: {} OK, {} Missing, {} ORIGINAL ({} rows total)",
            summary.matched, summary.missing, summary.original, summary.output_rows
        ));

        write_table(&table, Path::new(out), *format)?;

        if let Some(report_path) = report {
            write_json_report(report_path, &summary)?;
            info(format!("Report written: {}", report_path));
        }
    }
    Ok(())
}
