use expense_core::ExpenseStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::{expenses_json, print_expense_list};
use crate::ui::{hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())
        .map_err(|e| CliError::invalid_input(e.to_string()))?;

    let store = ctx.open_store()?;
    let expenses = store.list_all().map_err(CliError::from)?;

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&expenses_json(&expenses))?);
        return Ok(());
    }

    if expenses.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No expenses recorded yet.");
            if ui_ctx.mode.is_pretty() {
                print(&ui_ctx, &hint(&ui_ctx, "expense add"));
            }
        }
        return Ok(());
    }

    print_expense_list(&ui_ctx, &expenses, ctx.currency_symbol()?, format);
    Ok(())
}
