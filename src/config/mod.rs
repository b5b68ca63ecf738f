use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV file holding the workout sheet
    pub sheet: String,
    /// SQLite file holding the internal audit log
    pub database: String,
    /// Shared dashboard password (exact match)
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_view")]
    pub default_view: String,
    #[serde(default = "default_cardio_types")]
    pub cardio_types: Vec<String>,
    #[serde(default = "default_verify_writes")]
    pub verify_writes: bool,
}

fn default_view() -> String {
    "full".to_string()
}
fn default_cardio_types() -> Vec<String> {
    ["None", "Kickboxing", "Run", "Skip", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_verify_writes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: Self::sheet_file().to_string_lossy().to_string(),
            database: Self::database_file().to_string_lossy().to_string(),
            password: None,
            default_view: default_view(),
            cardio_types: default_cardio_types(),
            verify_writes: default_verify_writes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fitdash")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fitdash")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fitdash.conf")
    }

    /// Default location of the workout sheet
    pub fn sheet_file() -> PathBuf {
        Self::config_dir().join("sparta.csv")
    }

    /// Default location of the audit database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fitdash.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.sheet = expand_tilde(&cfg.sheet).to_string_lossy().to_string();
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Write this configuration to the standard config file
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Canonical spelling of a cardio option, matched case-insensitively.
    pub fn cardio_option(&self, input: &str) -> Option<&str> {
        self.cardio_types
            .iter()
            .find(|opt| opt.eq_ignore_ascii_case(input.trim()))
            .map(String::as_str)
    }
}
