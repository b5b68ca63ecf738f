use clap::ValueEnum;
use serde::Serialize;

/// Relative time window applied on top of the explicit date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum TimeView {
    /// Full history
    #[value(name = "full", alias = "all")]
    AllTime,
    /// Last 365 days
    #[value(name = "year")]
    LastYear,
    /// Last 30 days
    #[value(name = "month")]
    LastMonth,
    /// Last 7 days
    #[value(name = "week")]
    LastWeek,
}

impl TimeView {
    /// Size of the window in days; `None` for the full history.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeView::AllTime => None,
            TimeView::LastYear => Some(365),
            TimeView::LastMonth => Some(30),
            TimeView::LastWeek => Some(7),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeView::AllTime => "Full History",
            TimeView::LastYear => "Last Year",
            TimeView::LastMonth => "Last Month",
            TimeView::LastWeek => "Last Week",
        }
    }

    /// Parse the config spelling (`full`, `all`, `year`, `month`, `week`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "full" | "all" => Some(TimeView::AllTime),
            "year" => Some(TimeView::LastYear),
            "month" => Some(TimeView::LastMonth),
            "week" => Some(TimeView::LastWeek),
            _ => None,
        }
    }
}
