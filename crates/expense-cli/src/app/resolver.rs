//! Path resolution for config and database files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_db_path, ExpenseConfig};
use crate::constants::CONFIG_ENV;

/// Where the database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbPathSource {
    /// `--db` flag or `EXPENSE_DB`
    Flag,
    /// `store.path` in the config file
    Config,
    /// XDG data directory
    Default,
}

impl DbPathSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbPathSource::Flag => "flag",
            DbPathSource::Config => "config",
            DbPathSource::Default => "default",
        }
    }
}

/// Resolve the config file path, checking EXPENSE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the database path from CLI args, then config, then the default.
pub fn resolve_db_path(
    cli: &Cli,
    config: &ExpenseConfig,
) -> anyhow::Result<(PathBuf, DbPathSource)> {
    if let Some(path) = cli.db.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok((PathBuf::from(path), DbPathSource::Flag));
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok((PathBuf::from(path), DbPathSource::Config));
    }
    Ok((default_db_path()?, DbPathSource::Default))
}

/// Create the directory that will hold `path`, if it has one.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                )
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["expense", "--db", "/tmp/flag.db", "total"]).unwrap();
        let config = ExpenseConfig::new(PathBuf::from("/tmp/config.db"), None);

        let (path, source) = resolve_db_path(&cli, &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.db"));
        assert_eq!(source, DbPathSource::Flag);
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let cli = Cli::try_parse_from(["expense", "total"]).unwrap();
        if cli.db.is_some() {
            // EXPENSE_DB is set in the environment running the tests.
            return;
        }
        let config = ExpenseConfig::new(PathBuf::from("/tmp/config.db"), None);

        let (path, source) = resolve_db_path(&cli, &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config.db"));
        assert_eq!(source, DbPathSource::Config);
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("expense.db");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_file_name() {
        ensure_parent_dir(Path::new("expense.db")).unwrap();
    }
}
