use crate::config::Config;
use crate::core::reconcile::{Outcome, ReconcileSummary, non_visited, reconcile};
use crate::db::log::{AnalysisRecord, audit_or_warn, record_analysis};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::lookup::{EinLookup, SpeedioClient};
use crate::models::{Establishment, VisitSession};
use crate::registry::Registry;
use crate::report::{report_path, sheet_title, write_report};
use crate::ui::messages::{header, info, step, success, warning};
use crate::utils::date::format_br;
use crate::utils::table::{Column, Table};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Reconcile and print, but write neither the registry nor the report.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub summary: ReconcileSummary,
    pub non_visited: Vec<Establishment>,
    /// Report workbook written, if any.
    pub report: Option<PathBuf>,
}

/// High-level business logic for the `analyze` command.
pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Lookup service for this run, or None when lookups are disabled.
    pub fn lookup_client(cfg: &Config, no_lookup: bool) -> AppResult<Option<SpeedioClient>> {
        if cfg.lookup_enabled && !no_lookup {
            Ok(Some(SpeedioClient::new(&cfg.lookup_url, cfg.lookup_timeout_secs)?))
        } else {
            Ok(None)
        }
    }

    /// Reconcile `session` into `registry`, save it, then write the
    /// non-visited report and the audit trail.
    pub fn run(
        cfg: &Config,
        registry: &mut Registry,
        lookup: Option<&dyn EinLookup>,
        session: &VisitSession,
        opts: &AnalyzeOptions,
    ) -> AppResult<AnalysisResult> {
        let weekday = session.weekday();

        header(format!(
            "{} · {} ({} {})",
            session.collector,
            format_br(session.date),
            weekday.label(),
            weekday
        ));

        let summary = reconcile(registry, lookup, session);
        print_outcomes(&summary);

        if summary.is_dirty() && !opts.dry_run {
            registry.save()?;
            success(format!("Registry updated: {}", registry.path().display()));
        }

        let missed = non_visited(registry, &session.collector, weekday, session);

        let report = if opts.dry_run {
            info("Dry run: registry and report left untouched.");
            None
        } else {
            let path = report_path(&cfg.reports_dir, &session.collector, session.date);
            let title = sheet_title(session.date, &cfg.sheet_title_format);
            write_report(&path, &title, &missed)?;
            success(format!(
                "Non-visited report saved: {} (sheet '{}')",
                path.display(),
                title
            ));
            Some(path)
        };

        print_non_visited(&missed);

        if !opts.dry_run {
            Self::audit(cfg, session, &summary, missed.len(), report.as_ref());
        }

        Ok(AnalysisResult {
            summary,
            non_visited: missed,
            report,
        })
    }

    fn audit(
        cfg: &Config,
        session: &VisitSession,
        summary: &ReconcileSummary,
        missed: usize,
        report: Option<&PathBuf>,
    ) {
        let pool = match DbPool::new(&cfg.audit_db) {
            Ok(p) => p,
            Err(e) => {
                warning(format!("Audit log unavailable: {}", e));
                return;
            }
        };

        for o in &summary.outcomes {
            let ein = o.ein.to_string();
            match &o.outcome {
                Outcome::Created => {
                    audit_or_warn(&pool.conn, "create", &ein, "Establishment added from lookup")
                }
                Outcome::Updated {
                    collector_from,
                    day_added,
                } => {
                    if let Some(from) = collector_from {
                        audit_or_warn(
                            &pool.conn,
                            "collector",
                            &ein,
                            &format!("{} → {}", from, session.collector),
                        );
                    }
                    if *day_added {
                        audit_or_warn(
                            &pool.conn,
                            "day",
                            &ein,
                            &format!("Added visit day {}", session.weekday()),
                        );
                    }
                }
                Outcome::LookupFailed => {
                    audit_or_warn(&pool.conn, "lookup_failed", &ein, "EIN could not be resolved")
                }
                Outcome::Unchanged | Outcome::LookupSkipped => {}
            }
        }

        let rec = AnalysisRecord {
            visit_date: session.date.to_string(),
            collector: session.collector.clone(),
            visited: session.len(),
            created: summary.created(),
            updated: summary.updated(),
            not_found: summary.lookup_failed(),
            skipped: summary.lookup_skipped(),
            non_visited: missed,
            report: report.map(|p| p.display().to_string()).unwrap_or_default(),
        };

        if let Err(e) = record_analysis(&pool.conn, &rec) {
            warning(format!("Failed to record analysis: {}", e));
        }
    }
}

fn print_outcomes(summary: &ReconcileSummary) {
    for o in &summary.outcomes {
        match &o.outcome {
            Outcome::Created => step("➕", format!("{} added from lookup", o.ein)),
            Outcome::Updated {
                collector_from,
                day_added,
            } => {
                if let Some(from) = collector_from {
                    step("🔁", format!("{} collector updated (was {})", o.ein, from));
                }
                if *day_added {
                    step("📅", format!("{} visit day added", o.ein));
                }
            }
            Outcome::Unchanged => step("✔", format!("{}", o.ein)),
            Outcome::LookupFailed => step("❓", format!("{} could not be looked up", o.ein)),
            Outcome::LookupSkipped => {
                step("⏭", format!("{} unknown (lookup disabled)", o.ein))
            }
        }
    }
    println!();
}

fn print_non_visited(rows: &[Establishment]) {
    if rows.is_empty() {
        success("Every expected establishment was visited.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Região", 20),
        Column::new("Estabelecimento", 36),
        Column::new("CNPJ", 18),
        Column::new("Dias", 13),
        Column::new("Endereço", 40),
    ]);

    for e in rows {
        table.add_row(vec![
            e.region.clone(),
            e.name.clone(),
            e.ein.clone(),
            e.days.to_string(),
            e.address.clone(),
        ]);
    }

    warning(format!("{} establishment(s) not visited:", rows.len()));
    println!("\n{}", table.render());
}
