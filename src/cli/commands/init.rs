use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the audit database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.registry.clone(), cli.test)?;

    if let Some(db) = &cli.audit_db {
        cfg.audit_db = db.clone();
    }

    println!("⚙️  Initializing rVisitCheck…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Audit DB    : {}", &cfg.audit_db);
    println!("📗 Registry    : {}", &cfg.registry);

    let pool = DbPool::new(&cfg.audit_db)?;
    success(format!("Audit database initialized at {}", &cfg.audit_db));

    if !expand_tilde(&cfg.registry).exists() {
        warning(format!(
            "Registry spreadsheet not found yet: {} (set it with `config --edit` or --registry)",
            cfg.registry
        ));
    }

    audit_or_warn(
        &pool.conn,
        "init",
        "",
        &format!("Audit database initialized at {}", &cfg.audit_db),
    );

    println!("🎉 rVisitCheck initialization completed!");
    Ok(())
}
