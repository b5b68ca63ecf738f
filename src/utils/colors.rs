/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Zero totals are dimmed, everything else is printed as-is.
pub fn colorize_count<T: std::fmt::Display + PartialEq + Default>(value: T) -> String {
    if value == T::default() {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Placeholder and empty cells are dimmed.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "N/A" || v == "None" || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Checkbox cell: green tick or grey dash.
pub fn colorize_flag(done: bool) -> String {
    if done {
        format!("{GREEN}✔{RESET}")
    } else {
        format!("{GREY}-{RESET}")
    }
}

/// Color of each trend chart, matching the dashboard palette.
pub fn color_for_metric(metric: crate::models::summary::Metric) -> &'static str {
    use crate::models::summary::Metric;
    match metric {
        Metric::Weight => RED,
        Metric::FatPct => CYAN,
        Metric::WaistCm => GREEN,
    }
}
