use chrono::NaiveDate;

/// Formats accepted in the extract cells. The SAP exports use dotted
/// day-first dates, the Workday exports slashed day-first, and anything
/// re-saved from this tool is ISO.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a table cell into a date. Empty cells and the "-" sentinel are
/// treated as absent, not as errors.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// All calendar days in the inclusive range [start, end].
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}
