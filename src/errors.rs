//! Unified application error type.
//! Roster, session, log, storage and cli modules all return AppError so the
//! binary has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Roster
    // ---------------------------
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Index '{0}' already exists")]
    DuplicateIndex(String),

    #[error("Invalid student name '{0}': only letters and spaces are allowed")]
    InvalidName(String),

    #[error("No student with index '{0}'")]
    NotFound(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Index '{0}' is not part of the current session")]
    UnknownIndex(String),

    #[error("Session already finalized")]
    SessionFinalized,

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for failures coming from the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Db(_) | AppError::Csv(_) | AppError::Migration(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
