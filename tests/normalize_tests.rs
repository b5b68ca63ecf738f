mod common;

use common::{d, raw};
use fitdash::core::ingest::{coerce_flag, coerce_number, coerce_text, normalize};
use fitdash::core::query::{lifetime_totals, trend_series};
use fitdash::models::RawTable;
use fitdash::models::summary::Metric;

const H: [&str; 4] = ["Date", "Pullups", "Cardio Type", "Cardio Min/Reps"];

#[test]
fn test_rows_with_bad_dates_are_dropped() {
    let t = raw(
        &H,
        &[
            &["2024-01-01", "5", "", "10"],
            &["bad", "3", "", ""],
            &["2024-01-02", "7", "Run", "20"],
        ],
    );

    let entries = normalize(&t);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, d("2024-01-01"));
    assert_eq!(entries[1].date, d("2024-01-02"));

    let totals = lifetime_totals(&entries);
    assert_eq!(totals.pullups, 12);
    assert_eq!(totals.cardio_sessions, 1);
    assert_eq!(totals.cardio_amount, 30);
}

#[test]
fn test_blank_rows_are_skipped() {
    let t = raw(
        &H,
        &[&["", "", "", ""], &["  ", "", " ", ""], &["2024-03-01", "1", "", ""]],
    );
    assert_eq!(normalize(&t).len(), 1);
}

#[test]
fn test_headers_are_trimmed() {
    let t = raw(
        &[" Date ", "Pullups  ", " Weight"],
        &[&["2024-01-01", "4", "80.5"]],
    );
    let e = &normalize(&t)[0];
    assert_eq!(e.pullups, 4.0);
    assert_eq!(e.weight_kg, 80.5);
}

#[test]
fn test_missing_columns_take_defaults() {
    let t = raw(&["Date"], &[&["2024-01-01"]]);
    let e = &normalize(&t)[0];
    assert_eq!(e.pullups, 0.0);
    assert!(!e.abs_done);
    assert_eq!(e.cardio_type, "N/A");
    assert_eq!(e.comments, "N/A");
    assert_eq!(e.weight_band, "N/A");
}

#[test]
fn test_short_rows_are_padded() {
    let t = raw(&H, &[&["2024-01-01", "9"]]);
    let e = &normalize(&t)[0];
    assert_eq!(e.pullups, 9.0);
    assert_eq!(e.cardio_amount, 0.0);
    assert!(!e.is_cardio_session());
}

#[test]
fn test_lenient_date_spellings() {
    let t = raw(
        &["Date"],
        &[
            &["2024-01-05"],
            &["2024/01/05"],
            &["01/05/2024"],
            &["20240105"],
            &["2024-01-05 18:30:00"],
            &["2024-01-05T07:15:00Z"],
            &["January 05, 2024"],
        ],
    );
    let entries = normalize(&t);
    assert_eq!(entries.len(), 7);
    assert!(entries.iter().all(|e| e.date == d("2024-01-05")));
}

#[test]
fn test_number_coercion() {
    assert_eq!(coerce_number("12"), 12.0);
    assert_eq!(coerce_number(" 7.5 "), 7.5);
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number("abc"), 0.0);
    assert_eq!(coerce_number("N/A"), 0.0);
    assert_eq!(coerce_number("NaN"), 0.0);
    assert_eq!(coerce_number("inf"), 0.0);
}

#[test]
fn test_flag_coercion() {
    for t in ["TRUE", "true", "1", "1.0", "Yes", "y", "Checked", " true "] {
        assert!(coerce_flag(t), "{t} should be truthy");
    }
    for f in ["FALSE", "0", "", "no", "x", "2", "N/A"] {
        assert!(!coerce_flag(f), "{f} should be falsy");
    }
}

#[test]
fn test_text_coercion() {
    assert_eq!(coerce_text(""), "N/A");
    assert_eq!(coerce_text("   "), "N/A");
    assert_eq!(coerce_text(" Run "), "Run");
}

#[test]
fn test_normalize_is_idempotent() {
    let t = raw(
        &[
            "Date",
            "Pullups",
            "Pushups",
            "Abs",
            "Cardio Type",
            "Cardio Min/Reps",
            "Weight",
            "Comments",
            "Weight Band",
        ],
        &[
            &["2024-01-01", "5", "x", "yes", "", "10", "81.25", "", ""],
            &["01/02/2024", "3.5", "20", "FALSE", "Run", "25", "", "felt good", "Heavy"],
            &["nope", "1", "1", "1", "Run", "1", "1", "", ""],
        ],
    );

    let once = normalize(&t);
    let twice = normalize(&RawTable::from_entries(&once));
    assert_eq!(once, twice);
}

#[test]
fn test_zero_measurements_are_not_trend_points() {
    let t = raw(
        &["Date", "Weight"],
        &[
            &["2024-01-03", "80"],
            &["2024-01-01", "0"],
            &["2024-01-02", ""],
            &["2024-01-01", "82"],
        ],
    );
    let series = trend_series(&normalize(&t), Metric::Weight);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![82.0, 80.0]);
    assert_eq!(series[0].date, d("2024-01-01"));
}
