//! Merge a visit session into the registry and compute what was missed.

use crate::lookup::EinLookup;
use crate::models::{Ein, Establishment, VisitSession, WeekdayCode};
use crate::registry::Registry;
use crate::ui::messages::warning;
use std::collections::HashSet;

/// What happened to one visited EIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Unknown EIN, fetched from the lookup service and appended.
    Created,
    /// Known EIN whose row was patched.
    Updated {
        /// Previous collector, when the row was reassigned.
        collector_from: Option<String>,
        /// The session weekday was added to the row's visit days.
        day_added: bool,
    },
    Unchanged,
    /// Unknown EIN the lookup service could not resolve.
    LookupFailed,
    /// Unknown EIN, lookups disabled.
    LookupSkipped,
}

#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub ein: Ein,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct ReconcileSummary {
    pub outcomes: Vec<ReconcileOutcome>,
}

impl ReconcileSummary {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Updated { .. }))
    }

    pub fn lookup_failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::LookupFailed))
    }

    pub fn lookup_skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::LookupSkipped))
    }

    /// True when the registry must be written back.
    pub fn is_dirty(&self) -> bool {
        self.created() + self.updated() > 0
    }
}

/// Apply a visit session to the registry, in entry order.
///
/// - unknown EIN: looked up and appended with the session collector and
///   weekday; nothing is appended when the lookup fails or is disabled
/// - known EIN: collector overwritten when it differs, session weekday
///   added to the visit days when missing
pub fn reconcile(
    registry: &mut Registry,
    lookup: Option<&dyn EinLookup>,
    session: &VisitSession,
) -> ReconcileSummary {
    let weekday = session.weekday();
    let mut summary = ReconcileSummary::default();

    for ein in session.eins() {
        let outcome = match registry.find_mut(ein) {
            Some(row) => patch_row(row, &session.collector, weekday),
            None => match lookup {
                None => Outcome::LookupSkipped,
                Some(service) => match service.lookup(ein) {
                    Ok(Some(record)) => {
                        registry.append(Establishment::from_lookup(
                            record,
                            &session.collector,
                            weekday,
                        ));
                        Outcome::Created
                    }
                    Ok(None) => Outcome::LookupFailed,
                    Err(e) => {
                        warning(format!("Lookup of {} failed: {}", ein, e));
                        Outcome::LookupFailed
                    }
                },
            },
        };

        summary.outcomes.push(ReconcileOutcome {
            ein: ein.clone(),
            outcome,
        });
    }

    summary
}

fn patch_row(row: &mut Establishment, collector: &str, weekday: WeekdayCode) -> Outcome {
    let collector_from = if row.collector != collector {
        Some(std::mem::replace(&mut row.collector, collector.to_string()))
    } else {
        None
    };

    let day_added = row.days.append(weekday);

    if collector_from.is_none() && !day_added {
        Outcome::Unchanged
    } else {
        Outcome::Updated {
            collector_from,
            day_added,
        }
    }
}

/// Establishments `collector` was expected to visit on `weekday` that are
/// not part of the session. One row per EIN, registry order.
pub fn non_visited(
    registry: &Registry,
    collector: &str,
    weekday: WeekdayCode,
    session: &VisitSession,
) -> Vec<Establishment> {
    let mut seen: HashSet<String> = HashSet::new();

    registry
        .rows()
        .iter()
        .filter(|e| e.collector == collector && e.days.contains(weekday))
        .filter(|e| !session.contains_key(&e.ein_key()))
        .filter(|e| seen.insert(e.ein_key()))
        .cloned()
        .collect()
}
