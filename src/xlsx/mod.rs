//! Spreadsheet plumbing shared by the registry and the reports:
//! `calamine` on the read side, `rust_xlsxwriter` on the write side.

mod read;
mod write;

pub use read::{Grid, SheetGrid, cell_text, read_all_sheets};
pub use write::{copy_sheet, save_workbook, styled_sheet};
