//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for scripts: `key=value` and tab-separated rows
    #[default]
    Plain,
    /// Human-friendly with colors and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins over everything. `--format plain` and `TERM=dumb` force
    /// plain. Otherwise pretty on a TTY and plain when piped; `--format table`
    /// does not force a table into a pipe.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        match (json_flag, format_flag) {
            (true, _) => Self::Json,
            (false, Some("plain")) => Self::Plain,
            _ if term_is_dumb || !is_tty => Self::Plain,
            _ => Self::Pretty,
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
