use crate::cli::commands::{build_query, open_session, sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = &cli.command
    {
        let q = build_query(filters, cfg)?;
        let mut ctx = open_session(cli, cfg)?;
        ctx.refresh(&sheet(cfg));

        let file = expand_tilde(file).to_string_lossy().to_string();
        let n = ExportLogic::export(&ctx.dataset, &q, *format, &file, *force)?;

        if n > 0 {
            audit(
                &cfg.database,
                "export",
                &file,
                &format!("{} rows exported as {}", n, format.as_str()),
            );
        }
    }

    Ok(())
}
