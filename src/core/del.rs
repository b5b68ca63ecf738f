use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::ingest::normalize;
use crate::core::mutate::{delete_most_recent, write_back};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::RawTable;
use crate::store::SheetStore;
use crate::ui::messages::{success, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Describe the row `apply` would remove: the last appended one.
    pub fn preview(raw: &RawTable) -> Option<String> {
        let last = raw.rows.last()?;
        let single = RawTable {
            headers: raw.headers.clone(),
            rows: vec![last.clone()],
        };

        Some(match normalize(&single).first() {
            Some(e) => format!("last appended row dated {}", e.date_str()),
            None => "last appended row (no valid date)".to_string(),
        })
    }

    /// Drop the last row of the table held by `ctx` and write it back.
    /// Returns false when that table is empty.
    ///
    /// The sheet is not read again here: the row removed is the one
    /// `preview` showed for `ctx.raw`. Load it with
    /// `AppContext::refresh_for_write` first.
    pub fn apply(ctx: &mut AppContext, store: &dyn SheetStore, cfg: &Config) -> AppResult<bool> {
        if ctx.raw.is_empty() {
            warning("The sheet has no entries to delete.");
            return Ok(false);
        }

        let target = Self::preview(&ctx.raw).unwrap_or_default();
        let updated = delete_most_recent(&ctx.raw);
        write_back(store, &updated, cfg.verify_writes)?;

        audit(
            &cfg.database,
            "del",
            &target,
            &format!("Last entry deleted from {}", store.describe()),
        );

        success("Last entry deleted.");

        ctx.refresh(store);
        Ok(true)
    }
}
