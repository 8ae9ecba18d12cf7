use std::collections::HashSet;

use expense_core::{ExpenseError, ExpenseStore, NewExpense, SqliteStore};
use tempfile::TempDir;

fn temp_store(prefix: &str) -> (TempDir, SqliteStore) {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir should be created");
    let store = SqliteStore::open(dir.path().join("expense_tracker.db"))
        .expect("open should succeed");
    (dir, store)
}

fn add(store: &mut SqliteStore, date: &str, category: &str, amount: f64) -> i64 {
    store
        .add_record(&NewExpense::new(date, category, amount))
        .expect("insert should succeed")
}

#[test]
fn test_total_is_signed_sum() {
    let (_dir, mut store) = temp_store("total_sum");

    add(&mut store, "2024-01-01", "Food", 100.0);
    assert_eq!(store.total().unwrap(), 100.0);

    add(&mut store, "2024-01-02", "Income (Negative Expense)", -50.0);
    assert_eq!(store.total().unwrap(), 50.0);

    add(&mut store, "2024-01-03", "Bills", 12.25);
    add(&mut store, "2024-01-03", "Bills", 0.75);
    assert_eq!(store.total().unwrap(), 63.0);
}

#[test]
fn test_total_of_empty_store_is_zero() {
    let (_dir, store) = temp_store("total_empty");
    assert_eq!(store.total().unwrap(), 0.0);
}

#[test]
fn test_delete_missing_id_returns_false() {
    let (_dir, mut store) = temp_store("delete_missing");
    add(&mut store, "2024-01-01", "Food", 10.0);
    let before = store.list_all().unwrap();

    assert!(!store.delete_by_id(9999).unwrap());
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn test_delete_twice_returns_true_then_false() {
    let (_dir, mut store) = temp_store("delete_twice");
    let id = add(&mut store, "2024-01-01", "Food", 10.0);
    let keep = add(&mut store, "2024-01-02", "Bills", 20.0);

    assert!(store.delete_by_id(id).unwrap());
    assert!(!store.delete_by_id(id).unwrap());

    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
    assert!(store.get_record(id).unwrap().is_none());
}

#[test]
fn test_list_all_orders_by_date_descending() {
    let (_dir, mut store) = temp_store("list_order");
    add(&mut store, "2024-01-01", "Food", 1.0);
    add(&mut store, "2024-03-01", "Food", 2.0);
    add(&mut store, "2024-02-01", "Food", 3.0);

    let dates: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|expense| expense.date)
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn test_breakdown_groups_and_orders_by_total() {
    let (_dir, mut store) = temp_store("breakdown");
    add(&mut store, "2024-01-01", "Food", 10.0);
    add(&mut store, "2024-01-02", "Food", 5.0);
    add(&mut store, "2024-01-03", "Bills", 20.0);

    let breakdown: Vec<(String, f64)> = store
        .category_breakdown()
        .unwrap()
        .into_iter()
        .map(|row| (row.category, row.total))
        .collect();
    assert_eq!(
        breakdown,
        vec![("Bills".to_string(), 20.0), ("Food".to_string(), 15.0)]
    );
}

#[test]
fn test_breakdown_omits_categories_without_records() {
    let (_dir, mut store) = temp_store("breakdown_absent");
    assert!(store.category_breakdown().unwrap().is_empty());

    let id = add(&mut store, "2024-01-01", "Transport", 4.5);
    add(&mut store, "2024-01-01", "Food", 3.0);
    store.delete_by_id(id).unwrap();

    let categories: Vec<String> = store
        .category_breakdown()
        .unwrap()
        .into_iter()
        .map(|row| row.category)
        .collect();
    assert_eq!(categories, vec!["Food"]);
}

#[test]
fn test_breakdown_includes_negative_totals_last() {
    let (_dir, mut store) = temp_store("breakdown_negative");
    add(&mut store, "2024-01-01", "Income (Negative Expense)", -500.0);
    add(&mut store, "2024-01-01", "Food", 25.0);

    let breakdown = store.category_breakdown().unwrap();
    assert_eq!(breakdown[0].category, "Food");
    assert_eq!(breakdown[1].category, "Income (Negative Expense)");
    assert_eq!(breakdown[1].total, -500.0);
}

#[test]
fn test_insert_then_list_round_trip() {
    let (_dir, mut store) = temp_store("round_trip");
    let new_expense =
        NewExpense::new("2024-05-17", "Entertainment", 1234.5678).with_description("concert, row 3");

    let id = store.add_record(&new_expense).unwrap();
    let listed = store.list_all().unwrap();

    assert_eq!(listed.len(), 1);
    let stored = &listed[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.date, new_expense.date);
    assert_eq!(stored.category, new_expense.category);
    assert_eq!(stored.amount, new_expense.amount);
    assert_eq!(stored.description, new_expense.description);
    assert_eq!(store.get_record(id).unwrap().as_ref(), Some(stored));
}

#[test]
fn test_ids_are_unique_and_never_reused() {
    let (_dir, mut store) = temp_store("ids");
    let mut seen = HashSet::new();

    for day in 1..=5 {
        let id = add(&mut store, &format!("2024-01-0{}", day), "Food", day as f64);
        assert!(seen.insert(id));
    }

    // Removing the highest id must not make it available again.
    let max_id = *seen.iter().max().unwrap();
    assert!(store.delete_by_id(max_id).unwrap());

    let next = add(&mut store, "2024-01-06", "Food", 6.0);
    assert!(!seen.contains(&next));
    assert!(next > max_id);
}

#[test]
fn test_store_does_not_validate_records() {
    let (_dir, mut store) = temp_store("permissive");

    let id = store
        .add_record(&NewExpense::new("not-a-date", "Other", 0.0))
        .unwrap();
    let stored = store.get_record(id).unwrap().unwrap();
    assert_eq!(stored.date, "not-a-date");
    assert_eq!(stored.amount, 0.0);
}

#[test]
fn test_connections_released_after_every_operation() {
    let (_dir, mut store) = temp_store("release");
    assert_eq!(store.open_connections(), 0);

    let id = add(&mut store, "2024-01-01", "Food", 10.0);
    assert_eq!(store.open_connections(), 0);

    store.total().unwrap();
    assert_eq!(store.open_connections(), 0);

    store.list_all().unwrap();
    assert_eq!(store.open_connections(), 0);

    store.category_breakdown().unwrap();
    assert_eq!(store.open_connections(), 0);

    store.get_record(id).unwrap();
    assert_eq!(store.open_connections(), 0);

    store.delete_by_id(id).unwrap();
    store.delete_by_id(id).unwrap();
    assert_eq!(store.open_connections(), 0);

    store.initialize().unwrap();
    assert_eq!(store.open_connections(), 0);
}

#[test]
fn test_connections_released_after_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.db");
    let mut store = SqliteStore::open(&path).unwrap();
    add(&mut store, "2024-01-01", "Food", 10.0);

    // Replace the table with one that rejects every insert.
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "DROP TABLE expenses;
             CREATE TABLE expenses (id INTEGER PRIMARY KEY, date TEXT, category TEXT,
                                    amount REAL, description TEXT, CHECK (0));",
        )
        .unwrap();
    }

    let err = store
        .add_record(&NewExpense::new("2024-01-02", "Food", 1.0))
        .unwrap_err();
    assert!(matches!(err, ExpenseError::Storage(_)));
    assert_eq!(store.open_connections(), 0);
    assert!(store.list_all().unwrap().is_empty());

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("DROP TABLE expenses;").unwrap();
    }

    assert!(store.total().is_err());
    assert!(store.list_all().is_err());
    assert!(store.category_breakdown().is_err());
    assert!(store.get_record(1).is_err());
    assert!(store.delete_by_id(1).is_err());
    assert_eq!(store.open_connections(), 0);
}

#[test]
fn test_initialize_is_idempotent_and_keeps_records() {
    let (dir, mut store) = temp_store("idempotent");
    add(&mut store, "2024-01-01", "Food", 10.0);

    store.initialize().unwrap();
    store.initialize().unwrap();
    assert_eq!(store.list_all().unwrap().len(), 1);

    // A second store over the same file sees the same data.
    let reopened = SqliteStore::open(dir.path().join("expense_tracker.db")).unwrap();
    assert_eq!(reopened.total().unwrap(), 10.0);
}

#[test]
fn test_initialize_unreachable_storage_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(dir.path().join("no").join("such").join("dir.db"));

    let err = store.initialize().unwrap_err();
    assert!(matches!(err, ExpenseError::Initialization(_)));
    assert_eq!(store.open_connections(), 0);
}
