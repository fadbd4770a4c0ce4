use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::models::WeekdayCode;
use crate::registry::Registry;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        collector,
        day,
        date,
    } = cmd
    {
        let day = match (day, date) {
            (Some(code), _) => Some(WeekdayCode::parse(code)?),
            (None, Some(d)) => {
                let d = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                Some(WeekdayCode::from_date(d))
            }
            (None, None) => None,
        };

        let registry = Registry::load(&expand_tilde(&cfg.registry))?;
        let rows = ListLogic::filter(&registry, collector.as_deref(), day);

        if rows.is_empty() {
            info("No establishment matches the given filters.");
            return Ok(());
        }

        println!("{}", ListLogic::render(&rows));
        info(format!("{} of {} establishment(s)", rows.len(), registry.len()));
    }

    Ok(())
}
