//! fitdash library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! ingestion / query / mutation pipeline behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line overrides
    if let Some(sheet) = &cli.sheet {
        cfg.sheet = expand_tilde(sheet).to_string_lossy().to_string();
    }
    if let Some(db) = &cli.db {
        cfg.database = expand_tilde(db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
