//! Interactive prompts for expense fields.

use dialoguer::{Confirm, Input, Select};

use expense_core::validation;

/// Prompt for a date, pre-filled with `default`.
pub fn prompt_date(default: &str) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(default.to_string())
        .validate_with(|value: &String| -> Result<(), String> {
            validation::parse_date(value.trim())
                .map(|_| ())
                .map_err(|e| e.detail().to_string())
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read date: {}", e))
}

/// Prompt for a category from the suggested list.
///
/// The last choice lets the user type a category that is not on the list.
pub fn prompt_category(suggested: &[String]) -> anyhow::Result<String> {
    let mut items: Vec<&str> = suggested.iter().map(String::as_str).collect();
    items.push("Custom...");

    let choice = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))?;

    if choice < suggested.len() {
        return Ok(suggested[choice].clone());
    }

    Input::<String>::new()
        .with_prompt("Custom category")
        .validate_with(|value: &String| -> Result<(), String> {
            validation::normalize_category(value)
                .map(|_| ())
                .map_err(|e| e.detail().to_string())
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))
}

/// Prompt for an amount until a non-zero number is entered.
pub fn prompt_amount() -> anyhow::Result<f64> {
    let raw = Input::<String>::new()
        .with_prompt("Amount (negative for income)")
        .validate_with(|value: &String| -> Result<(), String> {
            validation::parse_amount(value)
                .map(|_| ())
                .map_err(|e| e.detail().to_string())
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read amount: {}", e))?;
    Ok(validation::parse_amount(&raw)?)
}

/// Prompt for an optional description.
pub fn prompt_description() -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read description: {}", e))
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
