//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap argument errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (expense id).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The expense database could not be initialized, read, or written.
    pub const STORAGE_FAILED: i32 = 5;
}

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "expense_tracker.db";

/// Currency symbol used when the config does not set one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20B9}";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "EXPENSE_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "EXPENSE_LOG";
