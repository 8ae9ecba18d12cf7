//! Error types for Expense core operations.
//!
//! Every storage fault is captured here and handed back to the caller of the
//! operation that hit it. The CLI layer maps these to user-friendly messages
//! and exit codes.

use thiserror::Error;

/// Result type alias for Expense operations.
pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Core error type for Expense operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Storage unreachable or schema creation failed
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Record validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Argument to a core helper could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ExpenseError {
    /// Whether this error came from the storage layer rather than from input.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ExpenseError::Initialization(_) | ExpenseError::Storage(_)
        )
    }

    /// The message without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            ExpenseError::Initialization(msg)
            | ExpenseError::Storage(msg)
            | ExpenseError::Validation(msg)
            | ExpenseError::InvalidInput(msg) => msg,
        }
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}
