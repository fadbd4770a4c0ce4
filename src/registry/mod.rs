//! The establishments registry: the master spreadsheet every analysis reads
//! and patches.
//!
//! Layout of the first worksheet (row 1 is the header):
//!
//! | Região | Estabelecimento | CNPJ | Coletor | Dias | Endereço |
//!
//! Every worksheet is kept as loaded. Saving writes the cells back unchanged,
//! except for the Coletor/Dias cells of patched rows and the appended rows.
//! Columns after Endereço and other worksheets are carried over as they are.

use crate::errors::{AppError, AppResult};
use crate::models::{Ein, Establishment, VisitDays};
use crate::xlsx::{SheetGrid, cell_text, copy_sheet, read_all_sheets, save_workbook};
use calamine::Data;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 6] = [
    "Região",
    "Estabelecimento",
    "CNPJ",
    "Coletor",
    "Dias",
    "Endereço",
];

const SHEET_TITLE: &str = "Estabelecimentos";
const COLLECTOR_COL: usize = 3;
const DAYS_COL: usize = 4;

pub struct Registry {
    path: PathBuf,
    rows: Vec<Establishment>,
    /// Grid row of each establishment in the first sheet; None once appended.
    origins: Vec<Option<usize>>,
    sheets: Vec<SheetGrid>,
}

impl Registry {
    /// In-memory registry, not yet backed by a file on disk.
    pub fn new(path: impl Into<PathBuf>, rows: Vec<Establishment>) -> Self {
        let header: Vec<Data> = HEADERS.iter().map(|h| Data::String(h.to_string())).collect();

        Self {
            path: path.into(),
            origins: vec![None; rows.len()],
            rows,
            sheets: vec![SheetGrid {
                title: SHEET_TITLE.to_string(),
                cells: vec![header],
            }],
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let sheets = read_all_sheets(path)?;
        let grid = &sheets
            .first()
            .ok_or_else(|| AppError::EmptyWorkbook(path.display().to_string()))?
            .cells;

        let mut rows = Vec::new();
        let mut origins = Vec::new();

        for (r, cells) in grid.iter().enumerate().skip(1) {
            if cells.iter().all(|c| cell_text(Some(c)).is_empty()) {
                continue;
            }
            rows.push(Establishment {
                region: cell_text(cells.first()),
                name: cell_text(cells.get(1)),
                ein: cell_text(cells.get(2)),
                collector: cell_text(cells.get(COLLECTOR_COL)),
                days: VisitDays::parse(&cell_text(cells.get(DAYS_COL))),
                address: cell_text(cells.get(5)),
            });
            origins.push(Some(r));
        }

        Ok(Self {
            path: path.to_path_buf(),
            rows,
            origins,
            sheets,
        })
    }

    /// Write the workbook back. Only collector and visit days are written for
    /// loaded rows, and only when they differ from what the cell holds.
    pub fn save(&self) -> AppResult<()> {
        let mut sheets = self.sheets.clone();

        if let Some(first) = sheets.first_mut() {
            for (e, origin) in self.rows.iter().zip(&self.origins) {
                match (*origin).and_then(|r| first.cells.get_mut(r)) {
                    Some(cells) => patch_cells(cells, e),
                    None => first.cells.push(new_cells(e)),
                }
            }
        }

        let mut workbook = Workbook::new();
        for sheet in &sheets {
            workbook.push_worksheet(copy_sheet(&sheet.title, &sheet.cells)?);
        }
        save_workbook(&mut workbook, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[Establishment] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row registered under this EIN.
    pub fn find(&self, ein: &Ein) -> Option<&Establishment> {
        self.rows.iter().find(|e| e.matches(ein))
    }

    pub fn find_mut(&mut self, ein: &Ein) -> Option<&mut Establishment> {
        self.rows.iter_mut().find(|e| e.matches(ein))
    }

    pub fn append(&mut self, establishment: Establishment) {
        self.rows.push(establishment);
        self.origins.push(None);
    }

    /// Distinct collectors, in order of first appearance.
    pub fn collectors(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.rows {
            if !e.collector.is_empty() && !out.contains(&e.collector) {
                out.push(e.collector.clone());
            }
        }
        out
    }
}

fn patch_cells(cells: &mut Vec<Data>, e: &Establishment) {
    if cells.len() <= DAYS_COL {
        cells.resize(DAYS_COL + 1, Data::Empty);
    }

    if cell_text(cells.get(COLLECTOR_COL)) != e.collector {
        cells[COLLECTOR_COL] = Data::String(e.collector.clone());
    }

    // keeps free text such as "3 (manhã)" when no day was added
    if VisitDays::parse(&cell_text(cells.get(DAYS_COL))) != e.days {
        cells[DAYS_COL] = Data::String(e.days.to_string());
    }
}

fn new_cells(e: &Establishment) -> Vec<Data> {
    [
        &e.region,
        &e.name,
        &e.ein,
        &e.collector,
        &e.days.to_string(),
        &e.address,
    ]
    .into_iter()
    .map(|v| Data::String(v.clone()))
    .collect()
}
