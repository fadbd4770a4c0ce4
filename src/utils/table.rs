//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{bold, pad_right, truncate};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Upper bound for the column; narrower content shrinks it.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|v| UnicodeWidthStr::width(v.as_str()))
                    .max()
                    .unwrap_or(0);
                content
                    .max(UnicodeWidthStr::width(col.header.as_str()))
                    .min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&bold(&pad_right(&truncate(&col.header, *w), *w)));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(&truncate(value, *w), *w));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
