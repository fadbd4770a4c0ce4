use crate::models::ein::Ein;
use crate::models::weekday::WeekdayCode;
use chrono::NaiveDate;
use std::collections::HashSet;

/// EINs visited by one collector on one date. Lives only for one analysis.
#[derive(Debug, Clone)]
pub struct VisitSession {
    pub collector: String,
    pub date: NaiveDate,
    eins: Vec<Ein>,
    seen: HashSet<String>,
}

impl VisitSession {
    pub fn new(collector: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            collector: collector.into(),
            date,
            eins: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn with_eins(collector: impl Into<String>, date: NaiveDate, eins: Vec<Ein>) -> Self {
        let mut session = Self::new(collector, date);
        for ein in eins {
            session.add(ein);
        }
        session
    }

    /// Returns false if the EIN was already part of the session.
    pub fn add(&mut self, ein: Ein) -> bool {
        if !self.seen.insert(ein.digits().to_string()) {
            return false;
        }
        self.eins.push(ein);
        true
    }

    pub fn contains_key(&self, digits: &str) -> bool {
        self.seen.contains(digits)
    }

    pub fn eins(&self) -> &[Ein] {
        &self.eins
    }

    pub fn len(&self) -> usize {
        self.eins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eins.is_empty()
    }

    pub fn weekday(&self) -> WeekdayCode {
        WeekdayCode::from_date(self.date)
    }
}
