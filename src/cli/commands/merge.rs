use crate::cli::commands::write_json_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge::merge;
use crate::errors::AppResult;
use crate::tables::{read_csv, write_table};
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Merge {
        master,
        batch,
        out,
        format,
        report,
    } = cmd
    {
        info("Loading master table...");
        let master_table = read_csv(Path::new(master))?;
        info("Loading new batch...");
        let batch_table = read_csv(Path::new(batch))?;

        let opts = cfg.merge_options();
        let (merged, summary) = merge(&master_table, &batch_table, &opts)?;

        info(format!(
            "Combined {} master + {} batch row(s)",
            summary.master_rows, summary.batch_rows
        ));
        info(format!(
            "Company-code filter removed {} row(s)",
            summary.filtered_out
        ));
        info(format!(
            "Removed {} duplicate(s) on employee + start date + absence type",
            summary.duplicates_removed
        ));
        success(format!("Merged table: {} row(s)", summary.total));

        write_table(&merged, Path::new(out), *format)?;

        if let Some(report_path) = report {
            write_json_report(report_path, &summary)?;
            info(format!("Report written: {}", report_path));
        }
    }
    Ok(())
}
