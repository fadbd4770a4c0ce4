use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AnalyzeLogic, AnalyzeOptions, infer_collector};
use crate::errors::{AppError, AppResult};
use crate::lookup::EinLookup;
use crate::models::{Ein, VisitSession, extract_ein};
use crate::registry::Registry;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::{confirm, prompt_date, prompt_eins};
use crate::utils::date::{format_br, parse_date, today};
use crate::utils::path::expand_tilde;
use std::collections::HashSet;
use std::fs;
use std::io::{stdin, stdout};

/// Read EINs from a file, one per line. Blank lines and `#` comments are
/// skipped; unreadable IDs are reported and skipped.
fn read_ein_file(path: &str) -> AppResult<Vec<Ein>> {
    let content = fs::read_to_string(expand_tilde(path))?;
    let mut eins = Vec::new();

    for (n, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match extract_ein(line) {
            Ok(ein) => eins.push(ein),
            Err(e) => warning(format!("{}:{}: {}", path, n + 1, e)),
        }
    }

    Ok(eins)
}

/// Reconcile a visit session and write the non-visited report.
pub fn handle(cmd: &Commands, cfg: &Config, no_lookup: bool) -> AppResult<()> {
    if let Commands::Analyze {
        collector,
        date,
        eins,
        file,
        yes,
        dry_run,
    } = cmd
    {
        let mut input = stdin().lock();
        let mut output = stdout();

        //
        // 1. Visit date
        //
        let visit_date = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
            None => prompt_date(&mut input, &mut output, today())?,
        };

        //
        // 2. Visited EINs
        //
        let mut ids: Vec<Ein> = eins.iter().map(|e| extract_ein(e)).collect::<AppResult<_>>()?;

        if let Some(f) = file {
            ids.extend(read_ein_file(f)?);
        }

        if eins.is_empty() && file.is_none() {
            ids = prompt_eins(&mut input, &mut output)?;
        }

        let mut seen = HashSet::new();
        ids.retain(|e| seen.insert(e.clone()));

        if ids.is_empty() {
            return Err(AppError::EmptySession);
        }

        //
        // 3. Registry and collector
        //
        let mut registry = Registry::load(&expand_tilde(&cfg.registry))?;

        let collector = match collector {
            Some(c) => c.trim().to_string(),
            None => {
                let c = infer_collector(&registry, &ids)?;
                info(format!("Collector inferred from the registry: {}", c));
                c
            }
        };

        if !cfg.collectors.is_empty() && !cfg.collectors.contains(&collector) {
            warning(format!(
                "'{}' is not among the configured collectors ({})",
                collector,
                cfg.collectors.join(", ")
            ));
        }

        let session = VisitSession::with_eins(collector, visit_date, ids);

        //
        // 4. Confirmation
        //
        if !*yes {
            let question = format!(
                "Collector: {}, date: {} ({}), {} EIN(s). Correct?",
                session.collector,
                format_br(session.date),
                session.weekday().label(),
                session.len()
            );
            if !confirm(&mut input, &mut output, &question)? {
                info("Analysis cancelled.");
                return Ok(());
            }
        }

        //
        // 5. Execute logic
        //
        let client = AnalyzeLogic::lookup_client(cfg, no_lookup)?;
        let lookup = client.as_ref().map(|c| c as &dyn EinLookup);

        let opts = AnalyzeOptions { dry_run: *dry_run };
        AnalyzeLogic::run(cfg, &mut registry, lookup, &session, &opts)?;
    }

    Ok(())
}

