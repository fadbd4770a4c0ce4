//! rVisitCheck library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: registry and report spreadsheets, EIN lookup, reconciliation.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod registry;
pub mod report;
pub mod ui;
pub mod utils;
pub mod xlsx;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Analyze { .. } => {
            cli::commands::analyze::handle(&cli.command, cfg, cli.no_lookup)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Lookup { .. } => cli::commands::lookup::handle(&cli.command, cfg, cli.no_lookup),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(registry) = &cli.registry {
        cfg.registry = registry.clone();
    }
    if let Some(dir) = &cli.reports_dir {
        cfg.reports_dir = dir.clone();
    }
    if let Some(db) = &cli.audit_db {
        cfg.audit_db = db.clone();
    }

    dispatch(&cli, &cfg)
}
