//! External EIN lookup, used for establishments missing from the registry.

mod speedio;

pub use speedio::{DEFAULT_URL, SpeedioClient, SpeedioResponse};

use crate::errors::AppResult;
use crate::models::{Ein, LookupRecord};

/// Source of establishment data for EINs the registry does not know.
///
/// `Ok(None)` means the service answered but had nothing usable.
pub trait EinLookup {
    fn lookup(&self, ein: &Ein) -> AppResult<Option<LookupRecord>>;
}
