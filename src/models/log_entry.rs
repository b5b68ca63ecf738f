use super::columns::{self, PLACEHOLDER};
use super::raw_table::RawTable;
use chrono::NaiveDate;
use serde::Serialize;

/// One normalized row of the workout sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub date: NaiveDate,

    pub pullups: f64,
    pub pushups: f64,
    pub squats: f64,
    pub burpees: f64,
    pub cardio_amount: f64,

    // 0 = not recorded
    pub weight_kg: f64,
    pub fat_pct: f64,
    pub waist_cm: f64,

    pub abs_done: bool,
    pub weights_done: bool,
    pub stretched: bool,

    pub cardio_type: String,
    pub weight_band: String,
    pub comments: String,
}

impl LogEntry {
    /// Blank entry for a date: zero counts, unchecked flags, no cardio, no comment.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            pullups: 0.0,
            pushups: 0.0,
            squats: 0.0,
            burpees: 0.0,
            cardio_amount: 0.0,
            weight_kg: 0.0,
            fat_pct: 0.0,
            waist_cm: 0.0,
            abs_done: false,
            weights_done: false,
            stretched: false,
            cardio_type: columns::NO_CARDIO.to_string(),
            weight_band: PLACEHOLDER.to_string(),
            comments: PLACEHOLDER.to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// True when the row records an actual cardio session.
    pub fn is_cardio_session(&self) -> bool {
        is_cardio_session(&self.cardio_type)
    }

    /// Comment text, unless it is the placeholder or empty.
    pub fn comment(&self) -> Option<&str> {
        let c = self.comments.trim();
        if c.is_empty() || c == PLACEHOLDER {
            None
        } else {
            Some(c)
        }
    }

    /// Sheet cells for this entry, keyed by column name.
    ///
    /// Placeholders are written back as blank cells; `Weight Band` is only
    /// emitted when it carries a value.
    pub fn to_raw_cells(&self) -> Vec<(&'static str, String)> {
        let mut cells = vec![
            (columns::DATE, self.date_str()),
            (columns::PULLUPS, format_number(self.pullups)),
            (columns::PUSHUPS, format_number(self.pushups)),
            (columns::SQUATS, format_number(self.squats)),
            (columns::BURPEES, format_number(self.burpees)),
            (columns::ABS, format_flag(self.abs_done)),
            (columns::WEIGHTS, format_flag(self.weights_done)),
            (columns::CARDIO_TYPE, unplaceholder(&self.cardio_type)),
            (columns::CARDIO_AMOUNT, format_number(self.cardio_amount)),
            (columns::STRETCHED, format_flag(self.stretched)),
            (columns::WEIGHT, format_number(self.weight_kg)),
            (columns::FAT_PCT, format_number(self.fat_pct)),
            (columns::WAIST_CM, format_number(self.waist_cm)),
            (columns::COMMENTS, unplaceholder(&self.comments)),
        ];

        if self.weight_band != PLACEHOLDER {
            cells.push((columns::WEIGHT_BAND, self.weight_band.clone()));
        }

        cells
    }
}

/// Cardio types that never count as a session.
pub fn is_cardio_session(cardio_type: &str) -> bool {
    cardio_type != columns::NO_CARDIO && cardio_type != PLACEHOLDER
}

impl RawTable {
    /// Serialize normalized entries back into a sheet with canonical columns.
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut table = RawTable::with_canonical_headers();
        for e in entries {
            let mut row = vec![String::new(); table.headers.len()];
            for (name, value) in e.to_raw_cells() {
                let idx = table.ensure_column(name);
                row.resize(table.headers.len(), String::new());
                row[idx] = value;
            }
            table.push_row(row);
        }
        table
    }
}

/// Whole numbers without a trailing ".0", everything else as-is.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

fn format_flag(b: bool) -> String {
    if b { "TRUE" } else { "FALSE" }.to_string()
}

fn unplaceholder(s: &str) -> String {
    if s == PLACEHOLDER {
        String::new()
    } else {
        s.to_string()
    }
}
