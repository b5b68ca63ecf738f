use crate::cli::commands::{build_query, open_session, sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::dashboard::render;

/// Handle the `dashboard` command: one full refresh, printed.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { filters, history } = &cli.command {
        let q = build_query(filters, cfg)?;
        let mut ctx = open_session(cli, cfg)?;

        let store = sheet(cfg);
        let dashboard = Core::refresh(&mut ctx, &store, &q);

        print!(
            "{}",
            render(&dashboard, &q, !ctx.dataset.is_empty(), *history)
        );
    }

    Ok(())
}
