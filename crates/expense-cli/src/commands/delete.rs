use expense_core::ExpenseStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{badge, format_amount, kv, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if args.no_input || !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                format!("Refusing to delete Expense ID {} without confirmation", args.id),
                "Pass --yes to delete without a prompt.",
            )
            .into());
        }

        let expense = store
            .get_record(args.id)
            .map_err(CliError::from)?
            .ok_or_else(|| not_found(args.id))?;

        let symbol = ctx.currency_symbol()?;
        print(&ui_ctx, &kv(&ui_ctx, "Date", &expense.date));
        print(&ui_ctx, &kv(&ui_ctx, "Category", &expense.category));
        print(
            &ui_ctx,
            &kv(&ui_ctx, "Amount", &format_amount(expense.amount, symbol)),
        );
        if !expense.description.is_empty() {
            print(&ui_ctx, &kv(&ui_ctx, "Description", &expense.description));
        }

        let prompt = format!("Are you sure you want to delete Expense ID {}?", args.id);
        if !confirm(&prompt)? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    let deleted = store.delete_by_id(args.id).map_err(CliError::from)?;
    if !deleted {
        return Err(not_found(args.id).into());
    }

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                let message = format!("Expense ID {} deleted successfully.", args.id);
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &message));
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", args.id);
            }
        }
    }
    Ok(())
}

fn not_found(id: i64) -> CliError {
    CliError::not_found(
        format!("Expense ID {} not found", id),
        "Run `expense list` to see expense IDs.",
    )
}
