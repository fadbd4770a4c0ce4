pub mod analyze;
pub mod backup;
pub mod collector;
pub mod list;
pub mod log;
pub mod reconcile;

pub use analyze::{AnalysisResult, AnalyzeLogic, AnalyzeOptions};
pub use collector::infer_collector;
pub use reconcile::{Outcome, ReconcileOutcome, ReconcileSummary, non_visited, reconcile};
