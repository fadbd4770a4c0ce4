use rvisitcheck::db::initialize::init_db;
use rvisitcheck::db::log::{AnalysisRecord, audit, record_analysis};
use rvisitcheck::db::pool::DbPool;

fn count(pool: &DbPool, sql: &str) -> i64 {
    pool.conn.query_row(sql, [], |r| r.get(0)).unwrap()
}

#[test]
fn test_migrations_run_once() {
    let pool = DbPool::in_memory().unwrap();
    let applied = "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'";
    assert_eq!(count(&pool, applied), 1);

    init_db(&pool.conn).unwrap();
    init_db(&pool.conn).unwrap();
    assert_eq!(count(&pool, applied), 1);
}

#[test]
fn test_record_analysis_counters() {
    let pool = DbPool::in_memory().unwrap();

    let rec = AnalysisRecord {
        visit_date: "2025-09-02".into(),
        collector: "Vitor".into(),
        visited: 4,
        created: 1,
        updated: 2,
        not_found: 0,
        skipped: 1,
        non_visited: 2,
        report: "/tmp/Vitor.xlsx".into(),
    };
    let id = record_analysis(&pool.conn, &rec).unwrap();
    assert_eq!(id, 1);

    let (collector, skipped, missed): (String, i64, i64) = pool
        .conn
        .query_row(
            "SELECT collector, skipped, non_visited FROM analyses WHERE id = ?1",
            [id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    assert_eq!(collector, "Vitor");
    assert_eq!(skipped, 1);
    assert_eq!(missed, 2);
}

#[test]
fn test_audit_rows_keep_target() {
    let pool = DbPool::in_memory().unwrap();
    audit(&pool.conn, "day", "33.444.555/0001-00", "Added visit day 3").unwrap();

    let target: String = pool
        .conn
        .query_row(
            "SELECT target FROM log WHERE operation = 'day'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(target, "33.444.555/0001-00");
}
