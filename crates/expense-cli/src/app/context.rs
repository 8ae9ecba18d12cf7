//! Application context for the Expense CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use expense_core::{ExpenseStore, SqliteStore};

use crate::cli::Cli;
use crate::config::{read_config_or_default, ExpenseConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{ensure_parent_dir, resolve_config_path, resolve_db_path, DbPathSource};

/// Application context that bundles CLI args with configuration.
///
/// Config is read at most once per process, and only by commands that
/// need it.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ExpenseConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&ExpenseConfig> {
        self.config
            .get_or_try_init(|| read_config_or_default(&resolve_config_path()?))
    }

    /// Currency symbol used to display amounts.
    pub fn currency_symbol(&self) -> anyhow::Result<&str> {
        Ok(self.config()?.display.currency_symbol.as_str())
    }

    /// Build the UI context for a command.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Build the UI context for messages written to stderr.
    pub fn error_ui_context(&self) -> UiContext {
        UiContext::for_stderr(self.cli.no_color, self.cli.ascii)
    }

    /// Resolve the database path for this invocation.
    pub fn db_path(&self) -> anyhow::Result<(PathBuf, DbPathSource)> {
        resolve_db_path(self.cli, self.config()?)
    }

    /// Open the expense store and make sure its schema exists.
    ///
    /// The default data directory is created on first use. A path given by
    /// flag or config must point into an existing directory.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let (path, source) = self.db_path()?;
        if source == DbPathSource::Default {
            ensure_parent_dir(&path).map_err(|e| CliError::storage(e.to_string()))?;
        }

        let store = SqliteStore::new(path);
        tracing::debug!(path = %store.path().display(), source = source.as_str(), "opening expense store");
        store.initialize().map_err(CliError::from)?;
        Ok(store)
    }
}
