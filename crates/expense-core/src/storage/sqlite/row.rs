//! Row mapping for database queries.

use rusqlite::Row;

use crate::storage::types::{CategoryTotal, Expense};

/// Columns selected by every record query, in the order `expense_from_row` reads them.
pub(super) const EXPENSE_COLUMNS: &str = "id, date, category, amount, description";

/// Map a row selected with [`EXPENSE_COLUMNS`] to an [`Expense`].
pub(super) fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

/// Map a `(category, total)` row to a [`CategoryTotal`].
pub(super) fn category_total_from_row(row: &Row<'_>) -> rusqlite::Result<CategoryTotal> {
    Ok(CategoryTotal {
        category: row.get(0)?,
        total: row.get(1)?,
    })
}
