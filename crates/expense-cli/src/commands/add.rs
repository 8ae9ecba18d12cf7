use expense_core::{validation, ExpenseStore, NewExpense};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_amount, prompt_category, prompt_date, prompt_description, today};
use crate::ui::{format_amount, print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = !args.no_input && ui_ctx.is_interactive();

    let date = match &args.date {
        Some(date) => date.trim().to_string(),
        None if interactive => prompt_date(&today())?.trim().to_string(),
        None => today(),
    };

    let category = match &args.category {
        Some(category) => category.clone(),
        None if interactive => prompt_category(&config.categories.suggested)?,
        None => {
            return Err(CliError::invalid_input_with_hint(
                "Category is required",
                "Pass --category, e.g. `expense add --category Food --amount 120`.",
            )
            .into())
        }
    };

    let amount = match args.amount {
        Some(amount) => amount,
        None if interactive => prompt_amount()?,
        None => {
            return Err(CliError::invalid_input_with_hint(
                "Amount is required",
                "Pass --amount; use a negative value for income.",
            )
            .into())
        }
    };

    let description = match &args.description {
        Some(description) => description.trim().to_string(),
        None if interactive => prompt_description()?.trim().to_string(),
        None => String::new(),
    };

    let category = validation::normalize_category(&category).map_err(CliError::from)?;
    let new_expense = NewExpense::new(date, category, amount).with_description(description);
    new_expense.validate().map_err(CliError::from)?;

    let mut store = ctx.open_store()?;
    let id = store.add_record(&new_expense).map_err(|e| {
        CliError::storage(format!("Could not add expense to the database: {}", e.detail()))
    })?;

    if ctx.quiet() {
        println!("{}", id);
        return Ok(());
    }

    let id_display = id.to_string();
    let title = format!(
        "Expense of {} added",
        format_amount(new_expense.amount, &config.display.currency_symbol)
    );
    let mut items = vec![
        ("ID", id_display.as_str()),
        ("Date", new_expense.date.as_str()),
        ("Category", new_expense.category.as_str()),
    ];
    if !new_expense.description.is_empty() {
        items.push(("Description", new_expense.description.as_str()));
    }
    print(&ui_ctx, &receipt(&ui_ctx, &title, &items));
    Ok(())
}
