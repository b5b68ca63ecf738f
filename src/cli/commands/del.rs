use crate::cli::commands::{open_session, sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::prompt::confirm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { yes } = &cli.command {
        let mut ctx = open_session(cli, cfg)?;
        let store = sheet(cfg);

        ctx.refresh_for_write(&store)?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = match DeleteLogic::preview(&ctx.raw) {
                Some(target) => format!(
                    "This will remove the most recent entry ({}). This action is irreversible.",
                    target
                ),
                None => "This will remove the most recent entry.".to_string(),
            };

            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(&mut ctx, &store, cfg)?;
    }

    Ok(())
}
