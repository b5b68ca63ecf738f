mod common;

use common::{d, entry_with, temp_file, temp_home};
use fitdash::core::context::DashboardQuery;
use fitdash::errors::AppError;
use fitdash::export::{ExportFormat, ExportLogic};
use fitdash::models::{LogEntry, TimeView};
use std::fs;
use std::path::Path;

fn dataset() -> Vec<LogEntry> {
    vec![
        entry_with("2024-11-20", |e| {
            e.pullups = 4.0;
            e.cardio_type = "Skip".into();
            e.cardio_amount = 200.0;
        }),
        entry_with("2025-01-05", |e| {
            e.pullups = 9.0;
            e.weights_done = true;
            e.waist_cm = 88.5;
            e.comments = "deload".into();
        }),
    ]
}

fn query(view: TimeView, category: &str) -> DashboardQuery {
    DashboardQuery {
        view,
        category: category.into(),
        range: None,
        today: d("2025-01-10"),
    }
}

#[test]
fn test_export_xlsx_writes_file() {
    let home = temp_home("export_xlsx");
    let out = temp_file(&home, "history.xlsx");

    let n = ExportLogic::export(
        &dataset(),
        &query(TimeView::AllTime, "All"),
        ExportFormat::Xlsx,
        &out,
        true,
    )
    .expect("export");

    assert_eq!(n, 2);
    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_applies_window() {
    let home = temp_home("export_window");
    let out = temp_file(&home, "month.json");

    let n = ExportLogic::export(
        &dataset(),
        &query(TimeView::LastMonth, "All"),
        ExportFormat::Json,
        &out,
        true,
    )
    .expect("export");
    assert_eq!(n, 1);

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json")).expect("valid json");
    assert_eq!(v[0]["Date"], "2025-01-05");
    assert_eq!(v[0]["Waist_cm"].as_f64(), Some(88.5));
    assert_eq!(v[0]["Comments"], "deload");
}

#[test]
fn test_export_rejects_relative_path() {
    let res = ExportLogic::export(
        &dataset(),
        &query(TimeView::AllTime, "All"),
        ExportFormat::Csv,
        "out.csv",
        true,
    );
    assert!(matches!(res, Err(AppError::Export(_))));
    assert!(!Path::new("out.csv").exists());
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let home = temp_home("export_none");
    let out = temp_file(&home, "none.csv");

    let n = ExportLogic::export(
        &dataset(),
        &query(TimeView::AllTime, "Run"),
        ExportFormat::Csv,
        &out,
        true,
    )
    .expect("export");
    assert_eq!(n, 0);
    assert!(!Path::new(&out).exists());
}
