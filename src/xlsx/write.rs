// src/xlsx/write.rs

use crate::errors::{AppError, AppResult};
use calamine::Data;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Worksheet with a colored header, banded rows and columns sized to content.
/// Every value is written as text.
pub fn styled_sheet(title: &str, headers: &[&str], rows: &[Vec<String>]) -> AppResult<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(title)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let fmt = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in values.iter().enumerate() {
            worksheet.write_with_format(row, col as u16, value.as_str(), &fmt)?;

            if col < col_widths.len() {
                col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(worksheet)
}

/// Re-create a worksheet read through calamine, keeping values and their types.
pub fn copy_sheet(title: &str, cells: &[Vec<Data>]) -> AppResult<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(title)?;

    for (r, row) in cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                Data::Empty => {}
                Data::String(s) => {
                    worksheet.write(r, c, s.as_str())?;
                }
                Data::Float(f) => {
                    worksheet.write(r, c, *f)?;
                }
                Data::Int(i) => {
                    worksheet.write(r, c, *i as f64)?;
                }
                Data::Bool(b) => {
                    worksheet.write(r, c, *b)?;
                }
                other => {
                    worksheet.write(r, c, other.to_string())?;
                }
            }
        }
    }

    Ok(worksheet)
}

/// Save next to the destination, then rename over it, so a failed write never
/// leaves a truncated workbook behind.
pub fn save_workbook(workbook: &mut Workbook, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Other(format!("invalid workbook path: {}", path.display())))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    workbook.save(&tmp)?;
    fs::rename(&tmp, path)?;

    Ok(())
}
