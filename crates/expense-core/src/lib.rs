//! # Expense Core
//!
//! Core library for Expense - a single-user, CLI-first personal expense tracker.
//!
//! This crate provides the data model, the persistence layer, and the
//! aggregate queries (running total and category breakdown), independent of
//! the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `ExpenseStore` trait, SQLite implementation, record types
//! - **validation**: input checks shared by every caller of the store
//! - **error**: error hierarchy for core operations

pub mod error;
pub mod storage;
pub mod validation;

pub use error::{ExpenseError, Result};
pub use storage::{
    CategoryTotal, Expense, ExpenseId, ExpenseStore, NewExpense, SqliteStore,
    DEFAULT_CATEGORIES,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
