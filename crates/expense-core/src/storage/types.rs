//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a record is created.
pub type ExpenseId = i64;

/// Categories offered to the user when none are configured.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Bills",
    "Entertainment",
    "Income (Negative Expense)",
    "Other",
];

/// A stored expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reused after deletion
    pub id: ExpenseId,

    /// Calendar date (YYYY-MM-DD)
    pub date: String,

    /// Free-form category label
    pub category: String,

    /// Signed amount; negative values represent income
    pub amount: f64,

    /// Optional description (may be empty)
    pub description: String,
}

/// Builder for creating new expense records.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl NewExpense {
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Summed amount for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}
