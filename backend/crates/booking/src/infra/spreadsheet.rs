//! Spreadsheet adapter
//!
//! Reading goes through `calamine` (xlsx, xls, ods), writing through
//! `umya-spreadsheet` (xlsx).

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::{BookingError, BookingResult};

/// Header text → cell text, holding only non-empty cells
pub type SheetRow = HashMap<String, String>;

/// Rows of the first sheet keyed by the header row; blank rows are dropped
pub fn read_first_sheet(bytes: &[u8]) -> BookingResult<Vec<SheetRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| BookingError::Spreadsheet(format!("opening workbook failed: {e}")))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| BookingError::Spreadsheet(format!("sheet '{sheet_name}' unreadable: {e}")))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_text(cell).trim().to_string())
        .collect();

    Ok(rows
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), cell_text(cell)))
                .filter(|(_, value)| !value.trim().is_empty())
                .collect::<SheetRow>()
        })
        .filter(|row| !row.is_empty())
        .collect())
}

/// Single-sheet xlsx with a header row followed by `rows`
pub fn write_sheet(sheet_name: &str, headers: &[&str], rows: &[Vec<String>]) -> BookingResult<Vec<u8>> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let sheet = book
        .new_sheet(sheet_name)
        .map_err(|e| BookingError::Export(format!("failed to create sheet: {e}")))?;

    for (col, header) in headers.iter().enumerate() {
        sheet.get_cell_mut((col as u32 + 1, 1u32)).set_value(*header);
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet
                .get_cell_mut((c as u32 + 1, r as u32 + 2))
                .set_value(value.as_str());
        }
    }

    let mut out: Vec<u8> = Vec::new();
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out)
        .map_err(|e| BookingError::Export(format!("failed to serialize workbook: {e}")))?;
    Ok(out)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // national IDs and school numbers arrive as numbers
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() <= 9_007_199_254_740_992.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(serial) => serial.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
