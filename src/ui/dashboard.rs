//! Terminal rendering of the dashboard.

use crate::core::context::DashboardQuery;
use crate::core::query::history;
use crate::models::LogEntry;
use crate::models::summary::{Dashboard, Metric, TrendPoint};
use crate::utils::colors::{
    BLUE, GREY, RESET, YELLOW, color_for_metric, colorize_count, colorize_flag, colorize_optional,
};
use crate::utils::date::long_date;
use crate::utils::formatting::{bold, format_count, format_measure, italic, sparkline};
use crate::utils::table::{Column, Table};
use std::fmt::Write;

const WRAP_WIDTH: usize = 76;

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", bold(title));
    let _ = writeln!(out, "{GREY}{}{RESET}", "─".repeat(WRAP_WIDTH));
}

/// Full dashboard as printable text.
pub fn render(d: &Dashboard, q: &DashboardQuery, has_data: bool, show_history: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", bold("🏋️  Sparta Fitness Dashboard"));

    if let Some(b) = &d.banner {
        let text = format!("Latest Entry ({}): {}", long_date(&b.date), b.comment);
        for line in textwrap::wrap(&text, WRAP_WIDTH - 4) {
            let _ = writeln!(out, "{BLUE}│{RESET} {}", line);
        }
    }

    if has_data {
        render_lifetime(&mut out, d);
    }

    section(&mut out, "📅 Insights & Filtering");
    if !has_data {
        let _ = writeln!(out, "{}", italic("No data available."));
        return out;
    }

    render_filters(&mut out, d, q);
    render_period(&mut out, d, q);

    if !d.chart_subset.is_empty() {
        section(&mut out, "📈 Body Progress Trends");
        for (metric, series) in &d.trends {
            render_trend(&mut out, *metric, series);
        }
    }

    if show_history {
        section(
            &mut out,
            &format!(
                "📋 History Log ({}) - Showing {} entries",
                q.category,
                d.activity_subset.len()
            ),
        );
        out.push_str(&render_history(&history(&d.activity_subset)));
    }

    out
}

fn render_lifetime(out: &mut String, d: &Dashboard) {
    section(out, "🏆 Lifetime Totals");

    let l = &d.lifetime;
    let mut t = Table::new(vec![
        Column::left("Metric"),
        Column::right("Total"),
        Column::left("Metric"),
        Column::right("Sessions"),
    ]);
    t.add_row(vec![
        "Total Pullups".into(),
        colorize_count(l.pullups),
        "Abs Sessions".into(),
        colorize_count(l.abs_sessions),
    ]);
    t.add_row(vec![
        "Total Squats".into(),
        colorize_count(l.squats),
        "Weight Sessions".into(),
        colorize_count(l.weight_sessions),
    ]);
    t.add_row(vec![
        "Total Pushups".into(),
        colorize_count(l.pushups),
        "Stretch Sessions".into(),
        colorize_count(l.stretch_sessions),
    ]);
    t.add_row(vec![
        "Total Burpees".into(),
        colorize_count(l.burpees),
        "Cardio Sessions".into(),
        colorize_count(l.cardio_sessions),
    ]);
    out.push_str(&t.render());
    let _ = writeln!(out, "⏱️  Total: {} minutes", l.cardio_amount);
}

fn render_filters(out: &mut String, d: &Dashboard, q: &DashboardQuery) {
    let _ = writeln!(out, "Time View : {YELLOW}{}{RESET}", q.view.label());
    let _ = writeln!(out, "Cardio    : {YELLOW}{}{RESET}", q.category);
    let _ = writeln!(out, "Available : {}", d.categories.join(", "));

    let range = q.range.or(d.bounds);
    if let Some((lo, hi)) = range {
        let _ = writeln!(out, "Date Range: {} → {}", lo, hi);
    }
}

fn render_period(out: &mut String, d: &Dashboard, q: &DashboardQuery) {
    section(out, "Summary for Selected Period");

    let mut t = Table::new(vec![
        Column::right("Pullups"),
        Column::right("Squats"),
        Column::right("Pushups"),
        Column::right(&format!("{} Sessions", q.category)),
    ]);
    t.add_row(vec![
        colorize_count(d.period.pullups),
        colorize_count(d.period.squats),
        colorize_count(d.period.pushups),
        colorize_count(d.activity.sessions),
    ]);
    out.push_str(&t.render());
    let _ = writeln!(out, "⏱️  Total: {} Min", d.activity.amount);
}

fn render_trend(out: &mut String, metric: Metric, series: &[TrendPoint]) {
    let color = color_for_metric(metric);
    let _ = write!(out, "{:<13}", metric.title());

    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        let _ = writeln!(out, "{}", italic("no measurements"));
        return;
    };

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let delta = last.value - first.value;

    let _ = writeln!(
        out,
        "{color}{}{RESET}  {:.1} {} ({:+.1} since {})",
        sparkline(&values),
        last.value,
        metric.unit(),
        delta,
        first.date
    );
}

/// History rows as a table, in the given order.
pub fn render_history(rows: &[LogEntry]) -> String {
    let mut t = Table::new(vec![
        Column::left("Date"),
        Column::right("Pull"),
        Column::right("Push"),
        Column::right("Squat"),
        Column::right("Burp"),
        Column::left("Abs"),
        Column::left("Wgt"),
        Column::left("Str"),
        Column::left("Cardio"),
        Column::right("Min"),
        Column::right("Kg"),
        Column::right("Fat%"),
        Column::right("Waist"),
        Column::left("Comments"),
    ]);

    for e in rows {
        t.add_row(vec![
            e.date_str(),
            format_count(e.pullups),
            format_count(e.pushups),
            format_count(e.squats),
            format_count(e.burpees),
            colorize_flag(e.abs_done),
            colorize_flag(e.weights_done),
            colorize_flag(e.stretched),
            colorize_optional(&e.cardio_type),
            format_count(e.cardio_amount),
            colorize_optional(&format_measure(e.weight_kg)),
            colorize_optional(&format_measure(e.fat_pct)),
            colorize_optional(&format_measure(e.waist_cm)),
            colorize_optional(&truncate(&e.comments, 40)),
        ]);
    }

    t.render()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
