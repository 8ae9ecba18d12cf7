//! Scoped SQLite connection handle.

use std::ops::Deref;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::Connection;

/// A connection that lives for one store operation.
///
/// Opening bumps the store's open-handle counter and dropping decrements it,
/// so the count returns to zero on every exit path, `?` returns included.
/// Fields drop in declaration order: the SQLite handle is closed before the
/// count goes down.
pub(super) struct ConnectionGuard<'a> {
    conn: Connection,
    _count: HandleCount<'a>,
}

impl<'a> ConnectionGuard<'a> {
    pub(super) fn open(path: &Path, open_handles: &'a AtomicUsize) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self {
            conn,
            _count: HandleCount::acquire(open_handles),
        })
    }
}

/// One unit of the open-handle counter, released on drop.
struct HandleCount<'a>(&'a AtomicUsize);

impl<'a> HandleCount<'a> {
    fn acquire(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for HandleCount<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Deref for ConnectionGuard<'_> {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}
