use crate::cli::commands::{open_session, sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::{AddLogic, FormInput};
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Add a daily log from the command-line form.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        pullups,
        pushups,
        squats,
        burpees,
        abs,
        weights,
        stretched,
        cardio_type,
        cardio_min,
        weight,
        fat,
        waist,
        comment,
    } = &cli.command
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date_arg {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        //
        // 2. Validate the form
        //
        let form = FormInput {
            date: d,
            pullups: *pullups,
            pushups: *pushups,
            squats: *squats,
            burpees: *burpees,
            abs: *abs,
            weights: *weights,
            stretched: *stretched,
            cardio_type: cardio_type.clone(),
            cardio_amount: *cardio_min,
            weight_kg: *weight,
            fat_pct: *fat,
            waist_cm: *waist,
            comment: comment.clone(),
        };
        let entry = form.into_entry(cfg, date::today())?;

        //
        // 3. Authenticate and write
        //
        let mut ctx = open_session(cli, cfg)?;
        AddLogic::apply(&mut ctx, &sheet(cfg), cfg, &entry)?;
    }

    Ok(())
}
