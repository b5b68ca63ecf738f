mod common;

use common::{d, entry, entry_with};
use fitdash::core::context::{DashboardQuery, build_dashboard};
use fitdash::core::query::{
    activity_totals, cardio_categories, date_bounds, filter_by_category, filter_by_date_range,
    filter_by_relative_window, history, latest_banner, latest_entry, lifetime_totals,
    period_totals, trend_series,
};
use fitdash::models::summary::Metric;
use fitdash::models::{LogEntry, TimeView};

fn dates(entries: &[LogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.date_str()).collect()
}

fn query(view: TimeView, category: &str, today: &str) -> DashboardQuery {
    DashboardQuery {
        view,
        category: category.to_string(),
        range: None,
        today: d(today),
    }
}

fn sample() -> Vec<LogEntry> {
    vec![
        entry_with("2023-01-01", |e| {
            e.pullups = 10.0;
            e.cardio_type = "Run".into();
            e.cardio_amount = 30.0;
            e.weight_kg = 90.0;
        }),
        entry_with("2024-06-01", |e| {
            e.pullups = 5.0;
            e.squats = 20.0;
            e.cardio_type = "Kickboxing".into();
            e.cardio_amount = 45.0;
            e.abs_done = true;
        }),
        entry_with("2025-01-01", |e| {
            e.pullups = 7.0;
            e.pushups = 15.0;
            e.cardio_type = "Run".into();
            e.cardio_amount = 20.0;
            e.weight_kg = 85.0;
            e.stretched = true;
        }),
    ]
}

#[test]
fn test_relative_windows() {
    let all = sample();
    let today = d("2025-01-10");

    assert_eq!(filter_by_relative_window(&all, TimeView::AllTime, today).len(), 3);
    assert_eq!(
        dates(&filter_by_relative_window(&all, TimeView::LastYear, today)),
        vec!["2024-06-01", "2025-01-01"]
    );
    // window starts 30 days back: 2024-12-11
    assert_eq!(
        dates(&filter_by_relative_window(&all, TimeView::LastMonth, today)),
        vec!["2025-01-01"]
    );
    assert!(filter_by_relative_window(&all, TimeView::LastWeek, today).is_empty());
}

#[test]
fn test_window_start_is_inclusive() {
    let all = vec![entry("2025-01-03"), entry("2025-01-02")];
    let kept = filter_by_relative_window(&all, TimeView::LastWeek, d("2025-01-10"));
    assert_eq!(dates(&kept), vec!["2025-01-03"]);
}

#[test]
fn test_date_range_is_inclusive() {
    let all = sample();
    let kept = filter_by_date_range(&all, d("2023-01-01"), d("2024-06-01"));
    assert_eq!(dates(&kept), vec!["2023-01-01", "2024-06-01"]);
}

#[test]
fn test_range_and_window_compose() {
    let all = sample();
    let mut q = query(TimeView::LastYear, "All", "2025-01-10");
    q.range = Some((d("2024-01-01"), d("2024-12-31")));

    let dash = build_dashboard(&all, &q);
    assert_eq!(dates(&dash.chart_subset), vec!["2024-06-01"]);
    // lifetime ignores every filter
    assert_eq!(dash.lifetime.pullups, 22);
}

#[test]
fn test_category_filter() {
    let all = sample();
    assert_eq!(filter_by_category(&all, "All").len(), 3);
    assert_eq!(
        dates(&filter_by_category(&all, "Run")),
        vec!["2023-01-01", "2025-01-01"]
    );
    assert!(filter_by_category(&all, "Skip").is_empty());
}

#[test]
fn test_lifetime_totals() {
    let t = lifetime_totals(&sample());
    assert_eq!(t.pullups, 22);
    assert_eq!(t.pushups, 15);
    assert_eq!(t.squats, 20);
    assert_eq!(t.burpees, 0);
    assert_eq!(t.abs_sessions, 1);
    assert_eq!(t.weight_sessions, 0);
    assert_eq!(t.stretch_sessions, 1);
    assert_eq!(t.cardio_sessions, 3);
    assert_eq!(t.cardio_amount, 95);
}

#[test]
fn test_sums_truncate_toward_zero() {
    let all = vec![
        entry_with("2024-01-01", |e| e.pullups = 2.6),
        entry_with("2024-01-02", |e| e.pullups = 2.6),
    ];
    assert_eq!(period_totals(&all).pullups, 5);
}

#[test]
fn test_none_and_placeholder_are_not_sessions() {
    let all = vec![
        entry_with("2024-01-01", |e| e.cardio_type = "None".into()),
        entry_with("2024-01-02", |e| e.cardio_type = "N/A".into()),
        entry_with("2024-01-03", |e| {
            e.cardio_type = "Skip".into();
            e.cardio_amount = 100.0;
        }),
    ];
    let a = activity_totals(&all);
    assert_eq!(a.sessions, 1);
    assert_eq!(a.amount, 100);
}

#[test]
fn test_period_and_activity_use_subsets() {
    let all = sample();
    let dash = build_dashboard(&all, &query(TimeView::LastYear, "Run", "2025-01-10"));

    assert_eq!(dash.period.pullups, 12);
    assert_eq!(dash.period.squats, 20);
    assert_eq!(dash.activity.sessions, 1);
    assert_eq!(dash.activity.amount, 20);
    assert_eq!(dates(&dash.activity_subset), vec!["2025-01-01"]);
}

#[test]
fn test_trend_series_sorted_and_sparse() {
    let all = vec![
        entry_with("2024-03-01", |e| e.fat_pct = 18.0),
        entry_with("2024-01-01", |e| e.fat_pct = 20.0),
        entry("2024-02-01"),
    ];
    let series = trend_series(&all, Metric::FatPct);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, d("2024-01-01"));
    assert_eq!(series[1].value, 18.0);
    assert!(trend_series(&all, Metric::WaistCm).is_empty());
}

#[test]
fn test_latest_entry_last_row_wins_ties() {
    let all = vec![
        entry_with("2024-05-01", |e| e.comments = "first".into()),
        entry_with("2024-05-02", |e| e.comments = "older row".into()),
        entry_with("2024-05-02", |e| e.comments = "newer row".into()),
        entry_with("2024-04-01", |e| e.comments = "back-dated".into()),
    ];
    assert_eq!(latest_entry(&all).map(|e| e.comments.as_str()), Some("newer row"));

    let banner = latest_banner(&all).expect("banner");
    assert_eq!(banner.date, d("2024-05-02"));
    assert_eq!(banner.comment, "newer row");
}

#[test]
fn test_no_banner_without_comment() {
    let all = vec![
        entry_with("2024-05-01", |e| e.comments = "old note".into()),
        entry("2024-05-02"),
    ];
    assert!(latest_banner(&all).is_none());
}

#[test]
fn test_cardio_categories() {
    let all = vec![
        entry_with("2024-01-01", |e| e.cardio_type = "Run".into()),
        entry_with("2024-01-02", |e| e.cardio_type = "None".into()),
        entry_with("2024-01-03", |e| e.cardio_type = "N/A".into()),
        entry_with("2024-01-04", |e| e.cardio_type = "0".into()),
        entry_with("2024-01-05", |e| e.cardio_type = "Kickboxing".into()),
        entry_with("2024-01-06", |e| e.cardio_type = "Run".into()),
    ];
    assert_eq!(cardio_categories(&all), vec!["All", "Kickboxing", "Run"]);
}

#[test]
fn test_history_newest_first_stable() {
    let all = vec![
        entry_with("2024-01-01", |e| e.comments = "a".into()),
        entry_with("2024-01-03", |e| e.comments = "b".into()),
        entry_with("2024-01-01", |e| e.comments = "c".into()),
    ];
    let rows: Vec<String> = history(&all).into_iter().map(|e| e.comments).collect();
    assert_eq!(rows, vec!["b", "a", "c"]);
}

#[test]
fn test_empty_input_is_safe() {
    let empty: Vec<LogEntry> = Vec::new();
    assert_eq!(lifetime_totals(&empty).pullups, 0);
    assert_eq!(period_totals(&empty).squats, 0);
    assert_eq!(activity_totals(&empty).sessions, 0);
    assert!(trend_series(&empty, Metric::Weight).is_empty());
    assert!(latest_entry(&empty).is_none());
    assert!(latest_banner(&empty).is_none());
    assert!(date_bounds(&empty).is_none());
    assert_eq!(cardio_categories(&empty), vec!["All"]);

    let dash = build_dashboard(&empty, &query(TimeView::LastWeek, "Run", "2025-01-10"));
    assert!(dash.banner.is_none());
    assert_eq!(dash.lifetime.cardio_amount, 0);
    assert_eq!(dash.categories, vec!["All"]);
    assert_eq!(dash.trends.len(), 3);
    assert!(dash.trends.iter().all(|(_, s)| s.is_empty()));
}

#[test]
fn test_date_bounds() {
    assert_eq!(
        date_bounds(&sample()),
        Some((d("2023-01-01"), d("2025-01-01")))
    );
}
