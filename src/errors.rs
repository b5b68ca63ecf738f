//! Unified application error type.
//! All modules (store, core, cli, db) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::store::TransportError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Sheet transport
    // ---------------------------
    #[error("Sheet error: {0}")]
    Transport(#[from] TransportError),

    #[error("Write not confirmed: {0}")]
    WriteNotConfirmed(String),

    // ---------------------------
    // Audit database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid cardio type: {0}")]
    InvalidCardioType(String),

    // ---------------------------
    // Access
    // ---------------------------
    #[error("Password incorrect")]
    Unauthorized,

    #[error("No password configured: run `fitdash init --secret <PASSWORD>`")]
    PasswordNotConfigured,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
