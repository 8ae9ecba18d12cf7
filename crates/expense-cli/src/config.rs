use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use expense_core::DEFAULT_CATEGORIES;

use crate::constants::{DB_FILE_NAME, DEFAULT_CURRENCY_SYMBOL};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpenseConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub categories: CategoriesSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesSection {
    #[serde(default = "default_suggested_categories")]
    pub suggested: Vec<String>,
}

impl Default for CategoriesSection {
    fn default() -> Self {
        Self {
            suggested: default_suggested_categories(),
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_suggested_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl ExpenseConfig {
    pub fn new(db_path: PathBuf, currency_symbol: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: Some(db_path.to_string_lossy().to_string()),
            },
            display: DisplaySection {
                currency_symbol: currency_symbol.unwrap_or_else(default_currency_symbol),
            },
            categories: CategoriesSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_db_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DB_FILE_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<ExpenseConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<ExpenseConfig> {
    if path.exists() {
        read_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(ExpenseConfig::default())
    }
}

fn parse_config(contents: &str) -> Result<ExpenseConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn write_config(path: &Path, config: &ExpenseConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expense"));
        }
    }
    Ok(home_dir()?.join(".config").join("expense"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expense"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("expense"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.store.path.is_none());
        assert_eq!(config.display.currency_symbol, "\u{20B9}");
        assert_eq!(config.categories.suggested.len(), 6);
        assert_eq!(config.categories.suggested[0], "Food");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [display]
            currency_symbol = "$"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(
            config.categories.suggested,
            default_suggested_categories()
        );
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [store]
            path = "/tmp/expenses.db"

            [display]
            currency_symbol = "EUR "

            [categories]
            suggested = ["Rent", "Groceries"]
            "#,
        )
        .unwrap();
        assert_eq!(config.store.path.as_deref(), Some("/tmp/expenses.db"));
        assert_eq!(config.display.currency_symbol, "EUR ");
        assert_eq!(config.categories.suggested, vec!["Rent", "Groceries"]);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = ExpenseConfig::new(dir.path().join("e.db"), Some("$".to_string()));

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded.store.path, config.store.path);
        assert_eq!(loaded.display.currency_symbol, "$");
        assert_eq!(loaded.categories.suggested, config.categories.suggested);
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config_or_default(&dir.path().join("absent.toml")).unwrap();
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\ncurrency_symbol = 1").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
