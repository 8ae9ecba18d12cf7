//! Record validation.
//!
//! The store accepts whatever it is given; these checks run on the caller's
//! side before `add_record`. Keeping them here means every front end applies
//! the same rules.

use chrono::NaiveDate;

use crate::error::{ExpenseError, Result};
use crate::storage::NewExpense;

/// Date format accepted for expense records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum bytes for a category label.
pub const MAX_CATEGORY_BYTES: usize = 128;

/// Maximum bytes for a description.
pub const MAX_DESCRIPTION_BYTES: usize = 4096;

/// Parse a `YYYY-MM-DD` date, rejecting impossible calendar dates.
///
/// Only the exact stored form is accepted. Surrounding whitespace is an
/// error rather than being trimmed, since dates are stored verbatim and
/// compared as text.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields; require the canonical 10-char form.
    if value.len() != 10 || value.trim() != value {
        return Err(ExpenseError::Validation(format!(
            "Invalid date (expected YYYY-MM-DD): {:?}",
            value
        )));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!("Invalid date (expected YYYY-MM-DD): {:?}", value))
    })
}

/// Parse a typed amount.
///
/// Text that is not a number is `InvalidInput`; a number that cannot be
/// recorded (zero, NaN, infinite) is `Validation`.
pub fn parse_amount(value: &str) -> Result<f64> {
    let amount: f64 = value.trim().parse().map_err(|_| {
        ExpenseError::InvalidInput("Invalid amount. Please enter a number.".to_string())
    })?;
    validate_amount(amount)?;
    Ok(amount)
}

/// Check that an amount can be recorded.
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(ExpenseError::Validation(
            "Amount must be a valid number.".to_string(),
        ));
    }
    if amount == 0.0 {
        return Err(ExpenseError::Validation(
            "Amount cannot be zero.".to_string(),
        ));
    }
    Ok(())
}

/// Trim a category label and check it is usable.
pub fn normalize_category(category: &str) -> Result<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_CATEGORY_BYTES {
        return Err(ExpenseError::Validation(format!(
            "Category too long (max {} bytes)",
            MAX_CATEGORY_BYTES
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a record before it is handed to the store.
pub fn validate_new_expense(expense: &NewExpense) -> Result<()> {
    parse_date(&expense.date)?;
    normalize_category(&expense.category)?;
    validate_amount(expense.amount)?;
    if expense.description.len() > MAX_DESCRIPTION_BYTES {
        return Err(ExpenseError::Validation(format!(
            "Description too long (max {} bytes)",
            MAX_DESCRIPTION_BYTES
        )));
    }
    Ok(())
}

impl NewExpense {
    /// Validate this record. See [`validate_new_expense`].
    pub fn validate(&self) -> Result<()> {
        validate_new_expense(self)
    }
}
