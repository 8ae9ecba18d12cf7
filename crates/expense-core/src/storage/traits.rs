//! Storage engine trait definition.
//!
//! The `ExpenseStore` trait is the whole contract between the store and the
//! presentation layer. Each method is self-contained: it acquires whatever
//! storage handle it needs, runs its statement, and releases the handle before
//! returning, on success and on error alike.

use super::types::{CategoryTotal, Expense, ExpenseId, NewExpense};
use crate::error::Result;

/// Storage interface for expense records.
pub trait ExpenseStore {
    /// Ensure the expenses table exists.
    ///
    /// Idempotent; safe to call on every process start regardless of prior
    /// state. Existing records are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Initialization` if the storage is unreachable or
    /// the schema cannot be created.
    fn initialize(&self) -> Result<()>;

    /// Insert a new record.
    ///
    /// The store does not validate the record; see
    /// [`validate_new_expense`](crate::validation::validate_new_expense).
    ///
    /// # Returns
    ///
    /// Returns the freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Storage` if the insert fails. Nothing is
    /// persisted in that case.
    fn add_record(&mut self, expense: &NewExpense) -> Result<ExpenseId>;

    /// Get a record by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(expense))` if found, `Ok(None)` if not found.
    fn get_record(&self, id: ExpenseId) -> Result<Option<Expense>>;

    /// Sum of all amounts, signed. `0.0` when there are no records.
    fn total(&self) -> Result<f64>;

    /// Every record, most recent date first.
    ///
    /// Order among records sharing a date is not part of the contract.
    fn list_all(&self) -> Result<Vec<Expense>>;

    /// Delete the record with this id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if a record was removed and `Ok(false)` if no record
    /// had this id.
    fn delete_by_id(&mut self, id: ExpenseId) -> Result<bool>;

    /// Per-category sums, largest total first.
    ///
    /// Only categories present in the data appear. Empty when there are no
    /// records.
    fn category_breakdown(&self) -> Result<Vec<CategoryTotal>>;
}
