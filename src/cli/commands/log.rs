use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, analyses } = cmd {
        let pool = DbPool::new(&cfg.audit_db)?;

        if *print || !*analyses {
            LogLogic::print_log(&pool)?;
        }
        if *analyses {
            LogLogic::print_analyses(&pool)?;
        }
    }

    Ok(())
}
