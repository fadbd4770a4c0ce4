use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::lookup::{EinLookup, SpeedioClient};
use crate::models::extract_ein;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config, no_lookup: bool) -> AppResult<()> {
    if let Commands::Lookup { id } = cmd {
        let ein = extract_ein(id)?;

        if no_lookup || !cfg.lookup_enabled {
            return Err(AppError::Config(
                "the lookup service is disabled (--no-lookup or lookup_enabled: false)".into(),
            ));
        }

        info(format!("Querying {} …", ein));
        let client = SpeedioClient::new(&cfg.lookup_url, cfg.lookup_timeout_secs)?;

        match client.lookup(&ein)? {
            Some(record) => {
                println!("CNPJ     : {}", record.ein);
                println!("Nome     : {}", record.name);
                println!("Região   : {}", record.region);
                println!("Endereço : {}", record.address);
            }
            None => warning(format!("The service has no data for {}", ein)),
        }
    }

    Ok(())
}
