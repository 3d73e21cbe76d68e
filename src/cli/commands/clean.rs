use crate::cli::commands::write_json_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clean::clean;
use crate::errors::{AppError, AppResult};
use crate::tables::{read_csv, write_table};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{parse_date, today};
use chrono::Months;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clean {
        input,
        out,
        format,
        cutoff,
        report,
    } = cmd
    {
        let cutoff_date = match cutoff {
            Some(s) => {
                Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
            }
            None => today().checked_add_months(Months::new(cfg.clean.horizon_months)),
        };

        info("Loading raw extract...");
        let table = read_csv(Path::new(input))?;

        let opts = cfg.clean_options(cutoff_date);
        let (cleaned, summary) = clean(&table, &opts)?;

        info(format!(
            "Removed: {} by employment status, {} with empty time-off type, {} beyond cutoff, {} by country",
            summary.removed_by_status,
            summary.removed_empty_type,
            summary.removed_after_cutoff,
            summary.removed_by_country
        ));
        if summary.unparseable_dates > 0 {
            warning(format!(
                "Dropped {} row(s) with unparseable dates",
                summary.unparseable_dates
            ));
        }
        success(format!(
            "Cleaned table: {} of {} row(s) kept",
            summary.output_rows, summary.input_rows
        ));

        write_table(&cleaned, Path::new(out), *format)?;

        if let Some(report_path) = report {
            write_json_report(report_path, &summary)?;
            info(format!("Report written: {}", report_path));
        }
    }
    Ok(())
}
