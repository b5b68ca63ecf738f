pub mod add;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod export;
pub mod init;
pub mod log;

use crate::cli::parser::{Cli, FilterArgs};
use crate::config::Config;
use crate::core::context::{AppContext, DashboardQuery};
use crate::errors::{AppError, AppResult};
use crate::models::TimeView;
use crate::store::CsvSheet;
use crate::utils::{date, prompt, range};

/// Check the password and return an authenticated context.
pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<AppContext> {
    if cfg.password.is_none() {
        return Err(AppError::PasswordNotConfigured);
    }

    let input = match &cli.password {
        Some(p) => p.clone(),
        None => prompt::read_password()?,
    };

    let mut ctx = AppContext::new();
    ctx.authenticate(cfg.password.as_deref(), &input)?;
    Ok(ctx)
}

pub(crate) fn sheet(cfg: &Config) -> CsvSheet {
    CsvSheet::new(&cfg.sheet)
}

/// Turn the filter flags into a dashboard query.
pub(crate) fn build_query(f: &FilterArgs, cfg: &Config) -> AppResult<DashboardQuery> {
    let view = match f.view {
        Some(v) => v,
        None => TimeView::from_code(&cfg.default_view).ok_or_else(|| {
            AppError::Config(format!("invalid default_view '{}'", cfg.default_view))
        })?,
    };

    let range = f.range.as_deref().map(range::parse_range).transpose()?;

    let today = match &f.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    Ok(DashboardQuery {
        view,
        category: f.cardio.clone(),
        range,
        today,
    })
}
