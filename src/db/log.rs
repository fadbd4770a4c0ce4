use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

/// Write an audit line into the `log` table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Audit without failing the caller.
pub fn audit_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(conn, operation, target, message) {
        warning(format!("Failed to write audit log: {}", e));
    }
}

/// Counters of one `analyze` run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRecord {
    pub visit_date: String,
    pub collector: String,
    pub visited: usize,
    pub created: usize,
    pub updated: usize,
    pub not_found: usize,
    pub skipped: usize,
    pub non_visited: usize,
    pub report: String,
}

pub fn record_analysis(conn: &Connection, rec: &AnalysisRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO analyses
            (run_at, visit_date, collector, visited, created, updated, not_found, skipped, non_visited, report)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            Local::now().to_rfc3339(),
            rec.visit_date,
            rec.collector,
            rec.visited as i64,
            rec.created as i64,
            rec.updated as i64,
            rec.not_found as i64,
            rec.skipped as i64,
            rec.non_visited as i64,
            rec.report,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
