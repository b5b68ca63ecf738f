// src/export/logic.rs

use crate::core::context::{DashboardQuery, build_dashboard};
use crate::core::query::history;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::models::LogEntry;
use crate::models::columns::ALL_CATEGORIES;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export of the history log.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the history rows selected by `q` (newest first).
    ///
    /// Returns the number of exported rows; 0 means nothing was written.
    pub fn export(
        dataset: &[LogEntry],
        q: &DashboardQuery,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let dashboard = build_dashboard(dataset, q);
        let rows: Vec<EntryExport> = history(&dashboard.activity_subset)
            .iter()
            .map(EntryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No entries found for the selected filters.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path, &build_title(q))?,
        }

        Ok(rows.len())
    }
}

/// Worksheet title for the selected cardio type and view.
fn build_title(q: &DashboardQuery) -> String {
    if q.category == ALL_CATEGORIES {
        format!("History {}", q.view.label())
    } else {
        format!("{} {}", q.category, q.view.label())
    }
}
