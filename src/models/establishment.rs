use crate::models::ein::Ein;
use crate::models::weekday::{VisitDays, WeekdayCode};
use serde::Serialize;

/// Marker written in place of data the lookup service did not return.
pub const PLACEHOLDER: &str = "???";

/// One row of the establishments registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Establishment {
    pub region: String,
    pub name: String,
    /// EIN as stored in the sheet (canonical or legacy punctuation).
    pub ein: String,
    pub collector: String,
    pub days: VisitDays,
    pub address: String,
}

impl Establishment {
    /// New registry row for an establishment first seen in a visit session.
    pub fn from_lookup(record: LookupRecord, collector: &str, day: WeekdayCode) -> Self {
        Self {
            region: record.region,
            name: record.name,
            ein: record.ein.to_string(),
            collector: collector.to_string(),
            days: VisitDays::single(day),
            address: record.address,
        }
    }

    /// Digits of the stored EIN, used as the matching key.
    pub fn ein_key(&self) -> String {
        self.ein.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn matches(&self, ein: &Ein) -> bool {
        self.ein_key() == ein.digits()
    }
}

/// What the lookup service tells us about an unknown establishment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRecord {
    pub region: String,
    pub name: String,
    pub ein: Ein,
    pub address: String,
}
