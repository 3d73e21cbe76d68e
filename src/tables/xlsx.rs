// src/tables/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::table::Table;
use crate::tables::notify_write_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Write the table as a plain XLSX data sheet with a styled header row and
/// auto column widths. No highlighting, no formulas.
pub(crate) fn write_xlsx(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Writing XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Caso dataset vuoto
    // ---------------------------
    if table.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_write_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.columns().iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Righe + larghezze colonne
    // ---------------------------
    let mut col_widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    for (row_index, fields) in table.rows().iter().enumerate() {
        let row = (row_index + 1) as u32;

        for (col, value) in fields.iter().enumerate() {
            worksheet
                .write(row, col as u16, value.as_str())
                .map_err(to_io_app_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_write_success("XLSX", path);
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
