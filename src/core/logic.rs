use crate::core::context::{AppContext, DashboardQuery};
use crate::models::summary::Dashboard;
use crate::store::SheetStore;

pub struct Core;

impl Core {
    /// One interaction: re-read the sheet, then filter and aggregate.
    pub fn refresh(ctx: &mut AppContext, store: &dyn SheetStore, q: &DashboardQuery) -> Dashboard {
        ctx.refresh(store);
        ctx.dashboard(q)
    }
}
