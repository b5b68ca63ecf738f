use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::mutate::{append, write_back};
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::models::columns::PLACEHOLDER;
use crate::store::SheetStore;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Raw values of the "add daily log" form.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub date: Option<NaiveDate>,
    pub pullups: u32,
    pub pushups: u32,
    pub squats: u32,
    pub burpees: u32,
    pub abs: bool,
    pub weights: bool,
    pub stretched: bool,
    pub cardio_type: Option<String>,
    pub cardio_amount: u32,
    pub weight_kg: f64,
    pub fat_pct: f64,
    pub waist_cm: f64,
    pub comment: Option<String>,
}

impl FormInput {
    /// Validate the form and build the entry to append.
    /// Missing date means today; missing cardio type means no session.
    pub fn into_entry(self, cfg: &Config, today: NaiveDate) -> AppResult<LogEntry> {
        let cardio_type = match &self.cardio_type {
            Some(t) => cfg
                .cardio_option(t)
                .ok_or_else(|| {
                    AppError::InvalidCardioType(format!(
                        "'{}'. Allowed: {}",
                        t,
                        cfg.cardio_types.join(", ")
                    ))
                })?
                .to_string(),
            None => crate::models::columns::NO_CARDIO.to_string(),
        };

        let weight_kg = non_negative("weight", self.weight_kg)?;
        let fat_pct = non_negative("fat", self.fat_pct)?;
        let waist_cm = non_negative("waist", self.waist_cm)?;

        let comments = match self.comment {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => PLACEHOLDER.to_string(),
        };

        Ok(LogEntry {
            date: self.date.unwrap_or(today),
            pullups: self.pullups as f64,
            pushups: self.pushups as f64,
            squats: self.squats as f64,
            burpees: self.burpees as f64,
            cardio_amount: self.cardio_amount as f64,
            weight_kg,
            fat_pct,
            waist_cm,
            abs_done: self.abs,
            weights_done: self.weights,
            stretched: self.stretched,
            cardio_type,
            weight_band: PLACEHOLDER.to_string(),
            comments,
        })
    }
}

fn non_negative(field: &str, v: f64) -> AppResult<f64> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(AppError::InvalidValue {
            field: field.to_string(),
            value: v.to_string(),
        })
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append `entry` as the last sheet row and write the sheet back.
    /// Success is only reported once the write has been verified.
    pub fn apply(
        ctx: &mut AppContext,
        store: &dyn SheetStore,
        cfg: &Config,
        entry: &LogEntry,
    ) -> AppResult<()> {
        ctx.refresh_for_write(store)?;

        let updated = append(&ctx.raw, entry);
        write_back(store, &updated, cfg.verify_writes)?;

        audit(
            &cfg.database,
            "add",
            &entry.date_str(),
            &format!("Log added to {}", store.describe()),
        );

        success(format!("Log for {} added successfully!", entry.date_str()));

        ctx.refresh(store);
        Ok(())
    }
}
