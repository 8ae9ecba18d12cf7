//! Storage abstraction for Expense.
//!
//! This module defines the `ExpenseStore` trait and the record types that
//! cross the boundary between the store and the presentation layer.
//!
//! ## Architecture
//!
//! The presentation layer only talks to the trait. The SQLite backend owns
//! the single `expenses` table and its schema lifecycle.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStore;
pub use traits::ExpenseStore;
pub use types::{CategoryTotal, Expense, ExpenseId, NewExpense, DEFAULT_CATEGORIES};
