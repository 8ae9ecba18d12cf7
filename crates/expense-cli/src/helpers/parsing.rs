//! Parsing helpers for dates and output format.

use chrono::Local;
use expense_core::validation::DATE_FORMAT;

/// Output format for list/breakdown commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

/// Today's local date in the stored date format.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
