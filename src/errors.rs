//! Unified application error type.
//! Every module (registry, lookup, report, core, cli) returns AppError so the
//! dispatcher can print one consistent message and exit.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Audit database
    // ---------------------------
    #[error("Audit database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Spreadsheets
    // ---------------------------
    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Spreadsheet write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet '{0}' has no worksheet")]
    EmptyWorkbook(String),

    // ---------------------------
    // Lookup service
    // ---------------------------
    #[error("EIN lookup failed: {0}")]
    Lookup(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected DD/MM/YYYY or YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid EIN: {0}")]
    InvalidEin(String),

    #[error("Invalid weekday code: {0} (expected 2..8)")]
    InvalidWeekday(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("The collector could not be determined from the visited EINs")]
    CollectorNotFound,

    #[error("No EIN was entered for the visit session")]
    EmptySession,

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
