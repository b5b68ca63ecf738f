//! Ingestion & normalization: raw sheet cells → clean `LogEntry` values.
//!
//! Normalization is best effort and never fails. Sheet content is typed by
//! hand (form input plus manual spreadsheet edits), so every malformed cell
//! resolves to a default instead of rejecting the row. The only row-level
//! rejection is an unparsable date.

use crate::models::columns::{self, PLACEHOLDER};
use crate::models::{LogEntry, RawTable};
use crate::store::{SheetStore, TransportError};
use crate::utils::date::parse_lenient;

const TRUTHY: [&str; 6] = ["true", "1", "1.0", "yes", "y", "checked"];

/// Fetch the raw table from the store.
pub fn load_raw(store: &dyn SheetStore) -> Result<RawTable, TransportError> {
    store.read_table()
}

/// Turn the raw sheet into analysis-ready entries, in sheet order.
pub fn normalize(raw: &RawTable) -> Vec<LogEntry> {
    let headers: Vec<String> = raw.headers.iter().map(|h| h.trim().to_string()).collect();
    let col = |name: &str| headers.iter().position(|h| h == name);

    let date_col = col(columns::DATE);
    let pullups = col(columns::PULLUPS);
    let pushups = col(columns::PUSHUPS);
    let squats = col(columns::SQUATS);
    let burpees = col(columns::BURPEES);
    let cardio_amount = col(columns::CARDIO_AMOUNT);
    let weight = col(columns::WEIGHT);
    let fat = col(columns::FAT_PCT);
    let waist = col(columns::WAIST_CM);
    let abs = col(columns::ABS);
    let weights = col(columns::WEIGHTS);
    let stretched = col(columns::STRETCHED);
    let cardio_type = col(columns::CARDIO_TYPE);
    let band = col(columns::WEIGHT_BAND);
    let comments = col(columns::COMMENTS);

    let mut out = Vec::with_capacity(raw.rows.len());

    for row in &raw.rows {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let cell = |idx: Option<usize>| cell_at(row, idx);

        let Some(date) = parse_lenient(cell(date_col)) else {
            continue;
        };

        out.push(LogEntry {
            date,
            pullups: coerce_number(cell(pullups)),
            pushups: coerce_number(cell(pushups)),
            squats: coerce_number(cell(squats)),
            burpees: coerce_number(cell(burpees)),
            cardio_amount: coerce_number(cell(cardio_amount)),
            weight_kg: coerce_number(cell(weight)),
            fat_pct: coerce_number(cell(fat)),
            waist_cm: coerce_number(cell(waist)),
            abs_done: coerce_flag(cell(abs)),
            weights_done: coerce_flag(cell(weights)),
            stretched: coerce_flag(cell(stretched)),
            cardio_type: coerce_text(cell(cardio_type)),
            weight_band: coerce_text(cell(band)),
            comments: coerce_text(cell(comments)),
        });
    }

    out
}

fn cell_at(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

/// Numeric cell; anything non-numeric (or NaN/inf) becomes 0.
pub fn coerce_number(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Checkbox cell, true only for the known truthy tokens.
pub fn coerce_flag(s: &str) -> bool {
    let v = s.trim().to_lowercase();
    TRUTHY.contains(&v.as_str())
}

/// Text-classification cell; blank becomes the placeholder.
pub fn coerce_text(s: &str) -> String {
    let v = s.trim();
    if v.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        v.to_string()
    }
}
