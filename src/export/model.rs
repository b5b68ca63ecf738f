// src/export/model.rs

use crate::models::LogEntry;
use crate::models::log_entry::format_number;
use serde::Serialize;

/// Flat history row used by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Pullups")]
    pub pullups: f64,
    #[serde(rename = "Pushups")]
    pub pushups: f64,
    #[serde(rename = "Squats")]
    pub squats: f64,
    #[serde(rename = "Burpees")]
    pub burpees: f64,
    #[serde(rename = "Abs")]
    pub abs: bool,
    #[serde(rename = "Weights")]
    pub weights: bool,
    #[serde(rename = "Cardio Type")]
    pub cardio_type: String,
    #[serde(rename = "Cardio Min/Reps")]
    pub cardio_amount: f64,
    #[serde(rename = "Stretched")]
    pub stretched: bool,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "Fat_Pct")]
    pub fat_pct: f64,
    #[serde(rename = "Waist_cm")]
    pub waist_cm: f64,
    #[serde(rename = "Comments")]
    pub comments: String,
}

impl From<&LogEntry> for EntryExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            date: e.date_str(),
            pullups: e.pullups,
            pushups: e.pushups,
            squats: e.squats,
            burpees: e.burpees,
            abs: e.abs_done,
            weights: e.weights_done,
            cardio_type: e.cardio_type.clone(),
            cardio_amount: e.cardio_amount,
            stretched: e.stretched,
            weight: e.weight_kg,
            fat_pct: e.fat_pct,
            waist_cm: e.waist_cm,
            comments: e.comments.clone(),
        }
    }
}

/// Header for XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    crate::models::columns::CANONICAL.to_vec()
}

/// Row as strings, same order as `get_headers`.
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        format_number(e.pullups),
        format_number(e.pushups),
        format_number(e.squats),
        format_number(e.burpees),
        e.abs.to_string(),
        e.weights.to_string(),
        e.cardio_type.clone(),
        format_number(e.cardio_amount),
        e.stretched.to_string(),
        format_number(e.weight),
        format_number(e.fat_pct),
        format_number(e.waist_cm),
        e.comments.clone(),
    ]
}
