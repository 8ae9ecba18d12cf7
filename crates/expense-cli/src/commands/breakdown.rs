use expense_core::ExpenseStore;

use crate::app::AppContext;
use crate::cli::BreakdownArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::{breakdown_json, print_breakdown};
use crate::ui::print;

pub fn handle_breakdown(ctx: &AppContext, args: &BreakdownArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())
        .map_err(|e| CliError::invalid_input(e.to_string()))?;

    let store = ctx.open_store()?;
    let breakdown = store.category_breakdown().map_err(CliError::from)?;

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&breakdown_json(&breakdown))?);
        return Ok(());
    }

    if breakdown.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No expenses recorded yet for breakdown.");
        }
        return Ok(());
    }

    print_breakdown(&ui_ctx, &breakdown, ctx.currency_symbol()?, format);
    Ok(())
}
