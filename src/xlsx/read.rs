// src/xlsx/read.rs

use crate::errors::AppResult;
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::path::Path;

/// Cell values laid out from A1, whatever the used range of the sheet is.
pub type Grid = Vec<Vec<Data>>;

/// A worksheet read back from disk.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    pub title: String,
    pub cells: Grid,
}

/// Read every worksheet, in workbook order.
pub fn read_all_sheets(path: &Path) -> AppResult<Vec<SheetGrid>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let mut sheets = Vec::new();

    for title in workbook.sheet_names() {
        let range = workbook.worksheet_range(&title)?;
        sheets.push(SheetGrid {
            title,
            cells: to_grid(&range),
        });
    }

    Ok(sheets)
}

/// calamine ranges start at the first used cell; pad them back to A1 so
/// column positions stay absolute.
fn to_grid(range: &Range<Data>) -> Grid {
    let Some((row0, col0)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Grid = vec![Vec::new(); row0 as usize];

    for row in range.rows() {
        let mut cells = vec![Data::Empty; col0 as usize];
        cells.extend(row.iter().cloned());
        grid.push(cells);
    }

    grid
}

/// Text rendering of a cell. Whole numbers lose their ".0" so that a
/// visit-days cell holding the number 5 reads as "5".
pub fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) if f.is_finite() && f.fract() == 0.0 => format!("{}", *f as i64),
        Some(other) => other.to_string(),
    }
}
