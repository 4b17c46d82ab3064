//! Unified application error type.
//! Hooks, the document store and the CLI all return AppError so a failed
//! lifecycle step aborts the operation that triggered it.

use std::fmt;
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    /// Missing or invalid user input. Aborts the create operation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The document store failed to persist, find or delete a record.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Timesheet {0} not found")]
    NotFound(i64),

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

impl AppError {
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        AppError::Validation(msg.to_string())
    }

    pub fn storage<T: fmt::Display>(err: T) -> Self {
        AppError::Storage(err.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
