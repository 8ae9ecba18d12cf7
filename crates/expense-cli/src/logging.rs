//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays clean for `--json` and plain output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV;

/// Install the global subscriber.
///
/// `EXPENSE_LOG` takes precedence; otherwise `-v` flags raise the level
/// from the `warn` default.
pub fn init(verbosity: u8) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(level_for(verbosity)),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
