use fitdash::core::log::LogLogic;
use fitdash::db::log::{load_log, ttlog};
use fitdash::db::pool::DbPool;
use fitdash::utils::formatting::strip_ansi;

#[test]
fn test_ttlog_rows_are_loaded_in_order() {
    let pool = DbPool::in_memory().expect("db");
    ttlog(&pool.conn, "init", "/tmp/sparta.csv", "Initialized").expect("log");
    ttlog(&pool.conn, "add", "2025-01-02", "Log added").expect("log");
    ttlog(&pool.conn, "del", "", "Last entry deleted").expect("log");

    let rows = load_log(&pool.conn).expect("load");
    let ops: Vec<&str> = rows.iter().map(|r| r.operation.as_str()).collect();
    assert_eq!(ops, vec!["init", "add", "del"]);
    assert_eq!(rows[1].target, "2025-01-02");
}

#[test]
fn test_log_render_aligns_columns() {
    let pool = DbPool::in_memory().expect("db");
    ttlog(&pool.conn, "add", "2025-01-02", "Log added").expect("log");
    ttlog(&pool.conn, "del", "", "Last entry deleted").expect("log");

    let lines: Vec<String> = LogLogic::render(&load_log(&pool.conn).expect("load"))
        .iter()
        .map(|l| strip_ansi(l))
        .collect();

    assert!(lines[0].contains("| add (2025-01-02) => Log added"));
    assert!(lines[1].contains("| del              => Last entry deleted"));
    assert_eq!(lines[0].find("=>"), lines[1].find("=>"));
}
