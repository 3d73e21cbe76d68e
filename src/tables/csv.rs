use crate::errors::AppResult;
use crate::models::table::Table;
use csv::{ReaderBuilder, Writer};
use std::path::Path;

/// Load a CSV file into a Table. The first record is the header; short rows
/// are padded to the header width.
pub fn read_csv(path: &Path) -> AppResult<Table> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(table)
}

/// Scrive la tabella in CSV nel file indicato.
pub fn write_csv(table: &Table, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
