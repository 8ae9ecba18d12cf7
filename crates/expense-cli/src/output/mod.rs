//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying expenses
//! and category totals in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{breakdown_json, categories_json, expenses_json, total_json};
pub use text::{print_breakdown, print_expense_list};
