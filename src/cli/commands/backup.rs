use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    {
        open_session(cli, cfg)?;
        let dest = expand_tilde(file).to_string_lossy().to_string();
        BackupLogic::backup(cfg, &dest, *compress, *force)?;
    }

    Ok(())
}
