use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::RawTable;
use crate::store::CsvSheet;
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file
///  - the workout sheet (header only, if missing)
///  - the audit database and its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { secret } = &cli.command {
        //
        // 1️⃣ CONFIGURATION
        //
        let mut new_cfg = cfg.clone();
        if let Some(s) = secret {
            new_cfg.password = Some(s.clone());
        }
        let path = new_cfg.save()?;

        println!("⚙️  Initializing fitdash…");
        println!("📄 Config file : {}", path.display());
        println!("📊 Sheet       : {}", &new_cfg.sheet);
        println!("🗄️  Database    : {}", &new_cfg.database);

        if new_cfg.password.is_none() {
            warning("No password set: use `fitdash init --secret <PASSWORD>` to enable the dashboard.");
        }

        //
        // 2️⃣ SHEET
        //
        let sheet = CsvSheet::new(&new_cfg.sheet);
        let headers = RawTable::with_canonical_headers().headers;
        if sheet.create_if_missing(&headers)? {
            success(format!("Sheet created at {}", &new_cfg.sheet));
        } else {
            info(format!("Sheet already present at {}", &new_cfg.sheet));
        }

        //
        // 3️⃣ AUDIT DATABASE
        //
        if let Some(parent) = std::path::Path::new(&new_cfg.database).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&new_cfg.database)?;
        init_db(&conn)?;

        //
        // 4️⃣ INTERNAL LOG (non blocking)
        //
        if let Err(e) = log::ttlog(
            &conn,
            "init",
            &new_cfg.sheet,
            &format!("Initialized with audit database {}", &new_cfg.database),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        println!("🎉 fitdash initialization completed!");
    }

    Ok(())
}
