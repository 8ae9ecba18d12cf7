//! Text and table output for expenses and category totals.

use expense_core::{CategoryTotal, Expense};

use crate::helpers::OutputFormat;
use crate::ui::{
    blank_line, format_amount, header, hint, print, single_line, table, truncate, Column,
    OutputMode, UiContext,
};

/// Widest description shown in a table cell before truncation.
const DESCRIPTION_MAX: usize = 48;

/// Print the expense list as a table (pretty) or tab-separated rows (plain).
pub fn print_expense_list(
    ctx: &UiContext,
    expenses: &[Expense],
    symbol: &str,
    format: Option<OutputFormat>,
) {
    let pretty = ctx.mode == OutputMode::Pretty && format != Some(OutputFormat::Plain);
    let count = format!("{} {}", expenses.len(), plural(expenses.len(), "expense"));

    if pretty {
        print(ctx, &header(ctx, "list", Some(&count)));
        blank_line(ctx);
    }

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Category"),
        Column::numeric("Amount"),
        Column::new("Description"),
    ];
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|expense| {
            let description = single_line(&expense.description);
            vec![
                expense.id.to_string(),
                single_line(&expense.date),
                single_line(&expense.category),
                format_amount(expense.amount, symbol),
                if pretty {
                    truncate(&description, DESCRIPTION_MAX)
                } else {
                    description
                },
            ]
        })
        .collect();

    print(ctx, &table(ctx, &columns, &rows));

    if pretty {
        blank_line(ctx);
        print(ctx, &hint(ctx, "expense delete <id>"));
    }
}

/// Print category totals as a table (pretty) or tab-separated rows (plain).
pub fn print_breakdown(
    ctx: &UiContext,
    breakdown: &[CategoryTotal],
    symbol: &str,
    format: Option<OutputFormat>,
) {
    let pretty = ctx.mode == OutputMode::Pretty && format != Some(OutputFormat::Plain);

    if pretty {
        let count = format!(
            "{} {}",
            breakdown.len(),
            plural(breakdown.len(), "category")
        );
        print(ctx, &header(ctx, "breakdown", Some(&count)));
        blank_line(ctx);
    }

    let columns = [Column::new("Category"), Column::numeric("Total")];
    let rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|row| vec![single_line(&row.category), format_amount(row.total, symbol)])
        .collect();

    print(ctx, &table(ctx, &columns, &rows));
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => noun.to_string(),
        (_, "category") => "categories".to_string(),
        _ => format!("{}s", noun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "expense"), "expense");
        assert_eq!(plural(0, "expense"), "expenses");
        assert_eq!(plural(2, "category"), "categories");
    }
}
