use crate::errors::{AppError, AppResult};
use crate::models::Ein;
use crate::registry::Registry;

/// Guess the collector of a session: the one owning most of the visited
/// establishments. Ties go to the collector listed first in the registry.
pub fn infer_collector(registry: &Registry, eins: &[Ein]) -> AppResult<String> {
    let order = registry.collectors();
    let mut counts = vec![0usize; order.len()];

    for ein in eins {
        if let Some(row) = registry.find(ein)
            && let Some(idx) = order.iter().position(|c| *c == row.collector)
        {
            counts[idx] += 1;
        }
    }

    let best = counts.iter().copied().max().unwrap_or(0);
    if best == 0 {
        return Err(AppError::CollectorNotFound);
    }

    counts
        .iter()
        .position(|c| *c == best)
        .map(|idx| order[idx].clone())
        .ok_or(AppError::CollectorNotFound)
}
