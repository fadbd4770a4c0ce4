use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Single-digit visit day: Monday = 2 ... Sunday = 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekdayCode(u8);

impl WeekdayCode {
    pub const FIRST: u8 = 2;
    pub const LAST: u8 = 8;

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.weekday().num_days_from_monday() as u8 + Self::FIRST)
    }

    pub fn new(code: u8) -> AppResult<Self> {
        if (Self::FIRST..=Self::LAST).contains(&code) {
            Ok(Self(code))
        } else {
            Err(AppError::InvalidWeekday(code.to_string()))
        }
    }

    /// Parse CLI input such as "4".
    pub fn parse(s: &str) -> AppResult<Self> {
        let code = s
            .trim()
            .parse::<u8>()
            .map_err(|_| AppError::InvalidWeekday(s.to_string()))?;
        Self::new(code)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            2 => "Segunda",
            3 => "Terça",
            4 => "Quarta",
            5 => "Quinta",
            6 => "Sexta",
            7 => "Sábado",
            _ => "Domingo",
        }
    }
}

impl fmt::Display for WeekdayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expected visit days of an establishment, stored in the registry as "2,4,6".
///
/// Stored digits are kept verbatim, even outside 2..8: the registry cell is
/// owned by the operators and a surprising value is preserved rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitDays(Vec<u8>);

impl VisitDays {
    /// Every non-digit is a separator; each digit is one code.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as u8)
                .collect(),
        )
    }

    pub fn single(code: WeekdayCode) -> Self {
        Self(vec![code.value()])
    }

    pub fn contains(&self, code: WeekdayCode) -> bool {
        self.0.contains(&code.value())
    }

    /// Add a visit day, keeping the list sorted and free of duplicates.
    /// Returns false when the code was already present.
    pub fn append(&mut self, code: WeekdayCode) -> bool {
        if self.contains(code) {
            return false;
        }

        self.0.push(code.value());
        self.0.sort_unstable();
        self.0.dedup();
        true
    }

    pub fn codes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VisitDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}
