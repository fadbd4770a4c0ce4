//! Audit database: a small SQLite file recording what every run changed.

pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
