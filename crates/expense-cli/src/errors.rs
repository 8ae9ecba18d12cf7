//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use expense_core::ExpenseError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (expense id)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Database could not be initialized or accessed
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        CliError::Storage(message.into())
    }

    /// The primary error message, without hint.
    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. } => message,
            CliError::InvalidInput { message, .. } => message,
            CliError::Storage(message) => message,
        }
    }

    /// Hint shown below the message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Storage(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::STORAGE_FAILED,
        }
    }
}

impl From<ExpenseError> for CliError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Initialization(_) => CliError::storage(format!(
                "Failed to initialize expense database: {}",
                err.detail()
            )),
            _ if err.is_storage() => CliError::storage(err.detail()),
            _ => CliError::invalid_input(err.detail()),
        }
    }
}

/// Exit code for an error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<ExpenseError>() {
        Some(core_err) if core_err.is_storage() => exit_codes::STORAGE_FAILED,
        Some(_) => exit_codes::INVALID_INPUT,
        None => exit_codes::FAILURE,
    }
}
