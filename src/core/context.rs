//! Per-interaction state threaded through the pipeline.

use crate::core::{ingest, query};
use crate::errors::{AppError, AppResult};
use crate::models::summary::{Dashboard, Metric};
use crate::models::{LogEntry, RawTable, TimeView};
use crate::store::SheetStore;
use crate::ui::messages::error;
use chrono::NaiveDate;

/// State of one run: the auth flag and the freshly loaded sheet.
///
/// The sheet is the only source of truth, so `refresh` rebuilds both the raw
/// and the normalized table from scratch every time it is called.
#[derive(Debug, Default)]
pub struct AppContext {
    pub authenticated: bool,
    pub raw: RawTable,
    pub dataset: Vec<LogEntry>,
    pub load_error: Option<String>,
}

/// Dashboard selectors for one request.
#[derive(Debug, Clone)]
pub struct DashboardQuery {
    pub view: TimeView,
    pub category: String,
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `input` with the configured secret. Once authenticated the
    /// flag stays set for the lifetime of the context.
    pub fn authenticate(&mut self, secret: Option<&str>, input: &str) -> AppResult<()> {
        if self.authenticated {
            return Ok(());
        }

        let secret = secret.ok_or(AppError::PasswordNotConfigured)?;
        if input == secret {
            self.authenticated = true;
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    /// Re-read the sheet. A transport failure is reported and leaves an
    /// empty table behind, so the rest of the pipeline still runs.
    pub fn refresh(&mut self, store: &dyn SheetStore) {
        match ingest::load_raw(store) {
            Ok(raw) => {
                self.dataset = ingest::normalize(&raw);
                self.raw = raw;
                self.load_error = None;
            }
            Err(e) => {
                let msg = format!("Error loading data: {e}");
                error(&msg);
                self.raw = RawTable::default();
                self.dataset = Vec::new();
                self.load_error = Some(msg);
            }
        }
    }

    /// Like `refresh`, but a failed read is an error. Used before writes,
    /// where an empty table would otherwise overwrite the sheet.
    pub fn refresh_for_write(&mut self, store: &dyn SheetStore) -> AppResult<()> {
        let raw = ingest::load_raw(store)?;
        self.dataset = ingest::normalize(&raw);
        self.raw = raw;
        self.load_error = None;
        Ok(())
    }

    /// Run filters and aggregates for one request.
    pub fn dashboard(&self, q: &DashboardQuery) -> Dashboard {
        build_dashboard(&self.dataset, q)
    }
}

pub fn build_dashboard(dataset: &[LogEntry], q: &DashboardQuery) -> Dashboard {
    if dataset.is_empty() {
        return Dashboard {
            categories: query::cardio_categories(dataset),
            trends: Metric::ALL.iter().map(|m| (*m, Vec::new())).collect(),
            ..Default::default()
        };
    }

    let bounds = query::date_bounds(dataset);

    let chart_subset = match q.range.or(bounds) {
        Some((lo, hi)) => query::filter_by_date_range(dataset, lo, hi),
        None => dataset.to_vec(),
    };
    let chart_subset = query::filter_by_relative_window(&chart_subset, q.view, q.today);
    let activity_subset = query::filter_by_category(&chart_subset, &q.category);

    Dashboard {
        banner: query::latest_banner(dataset),
        lifetime: query::lifetime_totals(dataset),
        period: query::period_totals(&chart_subset),
        activity: query::activity_totals(&activity_subset),
        trends: Metric::ALL
            .iter()
            .map(|m| (*m, query::trend_series(&chart_subset, *m)))
            .collect(),
        categories: query::cardio_categories(dataset),
        bounds,
        chart_subset,
        activity_subset,
    }
}
