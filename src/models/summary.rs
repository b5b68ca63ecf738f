use super::log_entry::LogEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Totals over the whole sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifetimeTotals {
    pub pullups: i64,
    pub pushups: i64,
    pub squats: i64,
    pub burpees: i64,
    pub abs_sessions: usize,
    pub weight_sessions: usize,
    pub stretch_sessions: usize,
    pub cardio_sessions: usize,
    pub cardio_amount: i64,
}

/// Totals over the date/window-filtered subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    pub pullups: i64,
    pub squats: i64,
    pub pushups: i64,
}

/// Cardio totals over the category-filtered subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTotals {
    pub sessions: usize,
    pub amount: i64,
}

/// Body measurements that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Weight,
    FatPct,
    WaistCm,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Weight, Metric::FatPct, Metric::WaistCm];

    pub fn value(&self, e: &LogEntry) -> f64 {
        match self {
            Metric::Weight => e.weight_kg,
            Metric::FatPct => e.fat_pct,
            Metric::WaistCm => e.waist_cm,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight Trend",
            Metric::FatPct => "Body Fat %",
            Metric::WaistCm => "Waist Size",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Weight => "kg",
            Metric::FatPct => "%",
            Metric::WaistCm => "cm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Comment of the most recent entry, shown above the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub date: NaiveDate,
    pub comment: String,
}

/// Everything the presentation layer needs for one refresh.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub banner: Option<Banner>,
    pub lifetime: LifetimeTotals,
    pub period: PeriodTotals,
    pub activity: ActivityTotals,
    pub trends: Vec<(Metric, Vec<TrendPoint>)>,
    pub chart_subset: Vec<LogEntry>,
    pub activity_subset: Vec<LogEntry>,
    pub categories: Vec<String>,
    pub bounds: Option<(NaiveDate, NaiveDate)>,
}
