//! Core error types for the Dealfolio engine.
//!
//! This module defines store-agnostic error types. Errors raised by a concrete
//! ledger store (database, file, remote API) are converted to these types by
//! the store implementation before they reach the core.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
///
/// Missing optional data (null amounts, absent valuations, deals without a
/// resolvable company) is never represented here; those cases resolve to
/// documented defaults inside the calculators.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for ledger input handed to the core.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse ledger document: {0}")]
    LedgerParse(#[from] serde_json::Error),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::LedgerParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
