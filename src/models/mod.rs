pub mod ein;
pub mod establishment;
pub mod session;
pub mod weekday;

pub use ein::{Ein, extract_ein};
pub use establishment::{Establishment, LookupRecord, PLACEHOLDER};
pub use session::VisitSession;
pub use weekday::{VisitDays, WeekdayCode};
