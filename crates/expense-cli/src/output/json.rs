//! JSON output formatting.
//!
//! Amounts are emitted at full precision; rounding is a display concern.

use expense_core::{CategoryTotal, Expense};

/// Convert an expense to JSON for output.
pub fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id,
        "date": expense.date,
        "category": expense.category,
        "amount": expense.amount,
        "description": expense.description,
    })
}

/// Convert multiple expenses to a JSON array for output.
pub fn expenses_json(expenses: &[Expense]) -> serde_json::Value {
    serde_json::Value::Array(expenses.iter().map(expense_json).collect())
}

/// Convert a category breakdown to a JSON array for output.
pub fn breakdown_json(breakdown: &[CategoryTotal]) -> serde_json::Value {
    serde_json::Value::Array(
        breakdown
            .iter()
            .map(|row| {
                serde_json::json!({
                    "category": row.category,
                    "total": row.total,
                })
            })
            .collect(),
    )
}

/// The running total as a JSON object.
pub fn total_json(total: f64) -> serde_json::Value {
    serde_json::json!({ "total": total })
}

/// The suggested categories as a JSON array.
pub fn categories_json(categories: &[String]) -> serde_json::Value {
    serde_json::json!(categories)
}
