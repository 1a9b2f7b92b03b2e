//! Unified application error type.
//! All modules (db, core, cli, remote) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    /// Malformed day key handed to a query. This is a programming error in
    /// the caller, not recoverable user input, so it propagates.
    #[error("Invalid date key: {0}")]
    InvalidDateKey(String),

    /// User-supplied event data that must be corrected before anything is
    /// persisted (empty title, bad date, end not after start).
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    // ---------------------------
    // Remote group service
    // ---------------------------
    /// Any failure talking to the group service. Callers fall back to the
    /// last-known local state; this never blocks local event creation.
    #[error("Remote error: {message}")]
    Remote {
        status: Option<u16>,
        message: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Remote {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
