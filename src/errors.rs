//! Unified application error type.
//! Controllers, the backend client and the session store all return AppError
//! so every command surfaces failures the same way.

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
    // Session store
    // ---------------------------
    #[error("Session store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Session expired. Please log in again with `rollcall login`.")]
    SessionExpired,

    // ---------------------------
    // Backend / transport
    // ---------------------------
    #[error("Invalid Staff ID or Password")]
    Authentication,

    #[error("Connection error: {0}")]
    Connectivity(String),

    #[error("{0}")]
    Backend(String),

    // ---------------------------
    // Draft and submission
    // ---------------------------
    #[error("No student data to submit")]
    EmptyRoster,

    #[error("Invalid attendance data ({0}). Please start again from `rollcall home`.")]
    MalformedDraft(String),

    #[error("No attendance data found. Please start again from `rollcall home`.")]
    NoDraft,

    #[error("{message}. Processed {processed} of {total} records")]
    PartialSubmission {
        processed: usize,
        total: usize,
        message: String,
    },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown roll number: {0}")]
    UnknownRoll(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// True when the same action may succeed if the user simply tries again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Connectivity(_) | AppError::PartialSubmission { .. }
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Connectivity(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
