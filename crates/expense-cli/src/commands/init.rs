use std::path::PathBuf;

use expense_core::SqliteStore;

use crate::app::{ensure_parent_dir, resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_db_path, write_config, ExpenseConfig};
use crate::errors::CliError;
use crate::ui::{blank_line, hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Use `expense init --force` to overwrite it.",
        )
        .into());
    }

    let db_path = match args.path.as_deref().or(ctx.cli().db.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_db_path()?,
    };

    // Database first, so a failed init leaves no config pointing at nothing.
    ensure_parent_dir(&db_path).map_err(|e| CliError::storage(e.to_string()))?;
    SqliteStore::open(&db_path).map_err(CliError::from)?;

    let config = ExpenseConfig::new(db_path.clone(), args.currency.clone());
    write_config(&config_path, &config)?;
    tracing::info!(config = %config_path.display(), db = %db_path.display(), "initialized expense tracker");

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let config_display = config_path.display().to_string();
    let db_display = db_path.display().to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Expense tracker initialized",
            &[
                ("Config", config_display.as_str()),
                ("Database", db_display.as_str()),
                ("Currency", config.display.currency_symbol.as_str()),
            ],
        ),
    );
    blank_line(&ui_ctx);
    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &hint(&ui_ctx, "expense add"));
    }
    Ok(())
}
