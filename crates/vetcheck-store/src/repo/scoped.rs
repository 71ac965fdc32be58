//! Scoped connection acquisition
//!
//! Every store operation opens its own connection through `ScopedConnection`.
//! The guard closes the connection when it goes out of scope, on success,
//! early return and error paths alike, and keeps a count of live guards.

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::db;
use crate::errors::Result;
use rusqlite::Connection;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};

/// RAII guard around a single SQLite connection
pub struct ScopedConnection<'a> {
    conn: Connection,
    live: &'a AtomicUsize,
    op: &'static str,
}

impl<'a> ScopedConnection<'a> {
    /// Open a connection for `op`, counting it in `live` until dropped
    pub fn acquire(
        config: &StoreConfig,
        live: &'a AtomicUsize,
        op: &'static str,
    ) -> Result<Self> {
        let conn = db::open(config)?;
        live.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(op = op, path = %config.path().display(), "connection acquired");
        Ok(Self { conn, live, op })
    }
}

impl Deref for ScopedConnection<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl Drop for ScopedConnection<'_> {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(op = self.op, "connection released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_guard_counts_live_connections() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("scoped.db"));
        let live = AtomicUsize::new(0);

        {
            let first = ScopedConnection::acquire(&config, &live, "test").unwrap();
            let _second = ScopedConnection::acquire(&config, &live, "test").unwrap();
            assert_eq!(live.load(Ordering::SeqCst), 2);
            first.execute_batch("SELECT 1").unwrap();
        }

        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failed_open_is_not_counted() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("missing").join("scoped.db"));
        let live = AtomicUsize::new(0);

        assert!(ScopedConnection::acquire(&config, &live, "test").is_err());
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }
}
