use expense_core::ExpenseStore;

use crate::app::AppContext;
use crate::cli::TotalArgs;
use crate::errors::CliError;
use crate::output::total_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{format_amount, header, kv, print, OutputMode};

pub fn handle_total(ctx: &AppContext, args: &TotalArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let total = store.total().map_err(CliError::from)?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&total_json(total))?);
        return Ok(());
    }

    let formatted = format_amount(total, ctx.currency_symbol()?);
    if ctx.quiet() {
        println!("{}", formatted);
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "total", None));
            let value = styled(&formatted, styles::bold(), ui_ctx.color);
            print(&ui_ctx, &kv(&ui_ctx, "Total Expense", &value));
        }
        OutputMode::Plain | OutputMode::Json => {
            print(&ui_ctx, &kv(&ui_ctx, "Total", &formatted));
        }
    }
    Ok(())
}
