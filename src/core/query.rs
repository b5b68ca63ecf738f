//! Filters and aggregates over normalized entries.
//!
//! Every function accepts an empty slice and returns its identity value
//! (0, an empty series, `None`).

use crate::models::columns::{ALL_CATEGORIES, NO_CARDIO, PLACEHOLDER};
use crate::models::summary::{
    ActivityTotals, Banner, LifetimeTotals, Metric, PeriodTotals, TrendPoint,
};
use crate::models::{LogEntry, TimeView};
use chrono::{Duration, NaiveDate};

/// Rows with `lo <= date <= hi`.
pub fn filter_by_date_range(entries: &[LogEntry], lo: NaiveDate, hi: NaiveDate) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|e| e.date >= lo && e.date <= hi)
        .cloned()
        .collect()
}

/// Rows inside the relative window ending today; `AllTime` keeps everything.
pub fn filter_by_relative_window(
    entries: &[LogEntry],
    view: TimeView,
    today: NaiveDate,
) -> Vec<LogEntry> {
    match view.days() {
        None => entries.to_vec(),
        Some(days) => {
            let start = today - Duration::days(days);
            entries.iter().filter(|e| e.date >= start).cloned().collect()
        }
    }
}

/// Rows of one cardio type; `"All"` keeps everything.
pub fn filter_by_category(entries: &[LogEntry], category: &str) -> Vec<LogEntry> {
    if category == ALL_CATEGORIES {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| e.cardio_type == category)
        .cloned()
        .collect()
}

pub fn lifetime_totals(entries: &[LogEntry]) -> LifetimeTotals {
    LifetimeTotals {
        pullups: sum(entries, |e| e.pullups),
        pushups: sum(entries, |e| e.pushups),
        squats: sum(entries, |e| e.squats),
        burpees: sum(entries, |e| e.burpees),
        abs_sessions: entries.iter().filter(|e| e.abs_done).count(),
        weight_sessions: entries.iter().filter(|e| e.weights_done).count(),
        stretch_sessions: entries.iter().filter(|e| e.stretched).count(),
        cardio_sessions: cardio_sessions(entries),
        cardio_amount: sum(entries, |e| e.cardio_amount),
    }
}

pub fn period_totals(subset: &[LogEntry]) -> PeriodTotals {
    PeriodTotals {
        pullups: sum(subset, |e| e.pullups),
        squats: sum(subset, |e| e.squats),
        pushups: sum(subset, |e| e.pushups),
    }
}

pub fn activity_totals(activity_subset: &[LogEntry]) -> ActivityTotals {
    ActivityTotals {
        sessions: cardio_sessions(activity_subset),
        amount: sum(activity_subset, |e| e.cardio_amount),
    }
}

/// Recorded values of a body metric, oldest first. Zero means "not
/// recorded" and never appears in the series.
pub fn trend_series(subset: &[LogEntry], metric: Metric) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = subset
        .iter()
        .map(|e| TrendPoint {
            date: e.date,
            value: metric.value(e),
        })
        .filter(|p| p.value > 0.0)
        .collect();

    // stable: same-day points keep sheet order
    points.sort_by_key(|p| p.date);
    points
}

/// Entry with the latest date; on ties the last one in sheet order wins.
pub fn latest_entry(entries: &[LogEntry]) -> Option<&LogEntry> {
    entries.iter().fold(None, |best: Option<&LogEntry>, e| match best {
        Some(b) if b.date > e.date => Some(b),
        _ => Some(e),
    })
}

/// Comment of the latest entry, when there is one worth showing.
pub fn latest_banner(entries: &[LogEntry]) -> Option<Banner> {
    let latest = latest_entry(entries)?;
    latest.comment().map(|c| Banner {
        date: latest.date,
        comment: c.to_string(),
    })
}

/// Cardio drill-down options: `"All"` followed by the sorted distinct types
/// that denote a real activity.
pub fn cardio_categories(entries: &[LogEntry]) -> Vec<String> {
    let mut types: Vec<String> = entries
        .iter()
        .map(|e| e.cardio_type.clone())
        .filter(|t| ![PLACEHOLDER, "0", "0.0", NO_CARDIO].contains(&t.as_str()))
        .collect();
    types.sort();
    types.dedup();

    let mut out = vec![ALL_CATEGORIES.to_string()];
    out.extend(types);
    out
}

/// Earliest and latest date in the table.
pub fn date_bounds(entries: &[LogEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let min = entries.iter().map(|e| e.date).min()?;
    let max = entries.iter().map(|e| e.date).max()?;
    Some((min, max))
}

/// History view: newest first, same-day rows keep sheet order.
pub fn history(activity_subset: &[LogEntry]) -> Vec<LogEntry> {
    let mut rows = activity_subset.to_vec();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

fn cardio_sessions(entries: &[LogEntry]) -> usize {
    entries.iter().filter(|e| e.is_cardio_session()).count()
}

/// Sum truncated toward zero, like the integer metrics on the dashboard.
fn sum<F: Fn(&LogEntry) -> f64>(entries: &[LogEntry], f: F) -> i64 {
    entries.iter().map(f).sum::<f64>() as i64
}
