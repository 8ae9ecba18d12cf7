//! SQLite storage backend.
//!
//! Every operation opens its own connection to the database file, runs one
//! statement, and drops the connection before returning. There is no shared
//! handle to leak between calls.

mod connection;
mod row;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::OptionalExtension;

use crate::error::{ExpenseError, Result};
use crate::storage::traits::ExpenseStore;
use crate::storage::types::{CategoryTotal, Expense, ExpenseId, NewExpense};

use connection::ConnectionGuard;
use row::{category_total_from_row, expense_from_row, EXPENSE_COLUMNS};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        category TEXT NOT NULL,
        amount REAL NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );
"#;

/// SQLite-backed expense store.
#[derive(Debug)]
pub struct SqliteStore {
    path: PathBuf,
    open_handles: AtomicUsize,
}

impl SqliteStore {
    /// Create a store for the database file at `path`.
    ///
    /// Nothing is touched on disk until the first operation; call
    /// [`ExpenseStore::initialize`] before using a fresh file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            open_handles: AtomicUsize::new(0),
        }
    }

    /// Create a store and initialize its schema.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.initialize()?;
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of connections currently held open by this store.
    ///
    /// Zero whenever no operation is in progress.
    pub fn open_connections(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }

    fn connect(&self) -> Result<ConnectionGuard<'_>> {
        ConnectionGuard::open(&self.path, &self.open_handles).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "could not open expense database");
            ExpenseError::Storage(format!(
                "Cannot open database {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

fn log_failure(operation: &'static str) -> impl Fn(&ExpenseError) {
    move |e: &ExpenseError| tracing::warn!(operation, error = %e, "expense store operation failed")
}

impl ExpenseStore for SqliteStore {
    fn initialize(&self) -> Result<()> {
        let conn = self.connect().map_err(|e| match e {
            ExpenseError::Storage(message) => ExpenseError::Initialization(message),
            other => other,
        })?;

        conn.execute_batch(SCHEMA).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "schema creation failed");
            ExpenseError::Initialization(format!("Failed to create expenses table: {}", e))
        })?;

        tracing::info!(path = %self.path.display(), "expense database ready");
        Ok(())
    }

    fn add_record(&mut self, expense: &NewExpense) -> Result<ExpenseId> {
        let conn = self.connect()?;

        let id: ExpenseId = conn
            .query_row(
                r#"
                INSERT INTO expenses (date, category, amount, description)
                VALUES (?1, ?2, ?3, ?4)
                RETURNING id
                "#,
                (
                    &expense.date,
                    &expense.category,
                    expense.amount,
                    &expense.description,
                ),
                |row| row.get(0),
            )
            .map_err(ExpenseError::from)
            .inspect_err(log_failure("add_record"))?;

        tracing::debug!(id, category = %expense.category, amount = expense.amount, "inserted expense");
        Ok(id)
    }

    fn get_record(&self, id: ExpenseId) -> Result<Option<Expense>> {
        let conn = self.connect()?;

        let query = format!("SELECT {} FROM expenses WHERE id = ?1", EXPENSE_COLUMNS);
        let expense = conn
            .query_row(&query, [id], expense_from_row)
            .optional()
            .map_err(ExpenseError::from)
            .inspect_err(log_failure("get_record"))?;

        Ok(expense)
    }

    fn total(&self) -> Result<f64> {
        let conn = self.connect()?;

        // TOTAL() yields 0.0 over zero rows where SUM() yields NULL.
        let total: f64 = conn
            .query_row("SELECT TOTAL(amount) FROM expenses", [], |row| row.get(0))
            .map_err(ExpenseError::from)
            .inspect_err(log_failure("total"))?;

        tracing::debug!(total, "computed running total");
        Ok(total)
    }

    fn list_all(&self) -> Result<Vec<Expense>> {
        let conn = self.connect()?;

        let query = format!(
            "SELECT {} FROM expenses ORDER BY date DESC, id DESC",
            EXPENSE_COLUMNS
        );
        let expenses = conn
            .prepare(&query)
            .and_then(|mut stmt| {
                let rows = stmt
                    .query_map([], expense_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>();
                rows
            })
            .map_err(ExpenseError::from)
            .inspect_err(log_failure("list_all"))?;

        tracing::debug!(count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    fn delete_by_id(&mut self, id: ExpenseId) -> Result<bool> {
        let conn = self.connect()?;

        let removed = conn
            .execute("DELETE FROM expenses WHERE id = ?1", [id])
            .map_err(ExpenseError::from)
            .inspect_err(log_failure("delete_by_id"))?;

        tracing::debug!(id, removed, "delete by id");
        Ok(removed > 0)
    }

    fn category_breakdown(&self) -> Result<Vec<CategoryTotal>> {
        let conn = self.connect()?;

        let breakdown = conn
            .prepare(
                r#"
                SELECT category, TOTAL(amount) AS total
                FROM expenses
                GROUP BY category
                ORDER BY total DESC, category ASC
                "#,
            )
            .and_then(|mut stmt| {
                let rows = stmt
                    .query_map([], category_total_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>();
                rows
            })
            .map_err(ExpenseError::from)
            .inspect_err(log_failure("category_breakdown"))?;

        tracing::debug!(categories = breakdown.len(), "computed category breakdown");
        Ok(breakdown)
    }
}
