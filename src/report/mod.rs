//! Per-collector non-visited reports: one workbook per collector, one
//! worksheet per visit date.

use crate::errors::AppResult;
use crate::models::Establishment;
use crate::ui::messages::info;
use crate::utils::date::month_name;
use crate::utils::path::expand_tilde;
use crate::xlsx::{SheetGrid, cell_text, copy_sheet, read_all_sheets, save_workbook, styled_sheet};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 5] = ["Região", "Estabelecimento", "CNPJ", "Dias", "Endereço"];

/// Excel refuses these in sheet names and caps names at 31 characters.
const SHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const SHEET_NAME_MAX: usize = 31;

/// `<reports_dir>/<collector>.xlsx`, with `{year}` and `{month}` in
/// `reports_dir` expanded for the visit date.
pub fn report_path(reports_dir: &str, collector: &str, date: NaiveDate) -> PathBuf {
    let dir = reports_dir
        .replace("{year}", &date.year().to_string())
        .replace("{month}", month_name(date.month()));

    let file: String = collector
        .chars()
        .map(|c| if SHEET_NAME_FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();

    expand_tilde(&dir).join(format!("{}.xlsx", file.trim()))
}

pub fn sheet_title(date: NaiveDate, format: &str) -> String {
    date.format(format)
        .to_string()
        .chars()
        .map(|c| if SHEET_NAME_FORBIDDEN.contains(&c) { '-' } else { c })
        .take(SHEET_NAME_MAX)
        .collect()
}

/// Write the non-visited establishments into `title`.
///
/// Existing sheets are carried over in order. A sheet already named `title`
/// is replaced where it stands, so re-running the same session rewrites the
/// same sheet. The written sheet becomes the active one.
pub fn write_report(path: &Path, title: &str, rows: &[Establishment]) -> AppResult<()> {
    let existing = if path.exists() {
        read_all_sheets(path)?
    } else {
        Vec::new()
    };

    let table: Vec<Vec<String>> = rows.iter().map(report_row).collect();

    let mut workbook = Workbook::new();
    let mut written = false;

    for sheet in &existing {
        if sheet.title == title {
            workbook.push_worksheet(session_sheet(title, &table)?);
            written = true;
        } else {
            workbook.push_worksheet(carry_over(sheet)?);
        }
    }

    if !written {
        workbook.push_worksheet(session_sheet(title, &table)?);
    } else {
        info(format!("Replacing existing sheet '{}'", title));
    }

    save_workbook(&mut workbook, path)
}

/// Earlier report sheets get their styling back; anything else is copied as is.
fn carry_over(sheet: &SheetGrid) -> AppResult<Worksheet> {
    let is_report = sheet.cells.first().is_some_and(|header| {
        HEADERS
            .iter()
            .enumerate()
            .all(|(c, h)| cell_text(header.get(c)) == *h)
    });

    if !is_report {
        return copy_sheet(&sheet.title, &sheet.cells);
    }

    let table: Vec<Vec<String>> = sheet
        .cells
        .iter()
        .skip(1)
        .map(|row| (0..HEADERS.len()).map(|c| cell_text(row.get(c))).collect())
        .collect();

    styled_sheet(&sheet.title, &HEADERS, &table)
}

fn session_sheet(title: &str, table: &[Vec<String>]) -> AppResult<Worksheet> {
    let mut sheet = styled_sheet(title, &HEADERS, table)?;
    sheet.set_active(true);
    Ok(sheet)
}

fn report_row(e: &Establishment) -> Vec<String> {
    vec![
        e.region.clone(),
        e.name.clone(),
        e.ein.clone(),
        e.days.to_string(),
        e.address.clone(),
    ]
}
