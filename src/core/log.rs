use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// ANSI colour of an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" => Colour::Green,
        "collector" => Colour::Yellow,
        "day" => Colour::Cyan,
        "lookup_failed" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool
            .conn
            .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let entries = rows.collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            println!("📜 Audit log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, ..)| op.len())
            .max()
            .unwrap_or(10);

        println!("📜 Audit log:\n");

        for (id, date, operation, target, message) in entries {
            // pad before painting: ANSI codes would count towards the width
            let op = format!("{:<op_w$}", operation, op_w = op_w);
            let op = color_for_operation(&operation).paint(op);

            if target.is_empty() {
                println!("{:>id_w$}: {} | {} => {}", id, date, op, message, id_w = id_w);
            } else {
                println!(
                    "{:>id_w$}: {} | {} {} => {}",
                    id,
                    date,
                    op,
                    target,
                    message,
                    id_w = id_w
                );
            }
        }

        Ok(())
    }

    /// One line per recorded `analyze` run.
    pub fn print_analyses(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT visit_date, collector, visited, created, updated, not_found, skipped, non_visited
             FROM analyses ORDER BY visit_date ASC, id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(vec![
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?.to_string(),
                row.get::<_, i64>(3)?.to_string(),
                row.get::<_, i64>(4)?.to_string(),
                row.get::<_, i64>(5)?.to_string(),
                row.get::<_, i64>(6)?.to_string(),
                row.get::<_, i64>(7)?.to_string(),
            ])
        })?;

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Collector", 20),
            Column::new("Visited", 7),
            Column::new("New", 5),
            Column::new("Updated", 7),
            Column::new("Not found", 9),
            Column::new("Skipped", 7),
            Column::new("Missed", 6),
        ]);

        for r in rows {
            table.add_row(r?);
        }

        if table.rows.is_empty() {
            println!("📜 No analysis recorded yet.");
        } else {
            println!("{}", table.render());
        }

        Ok(())
    }
}
