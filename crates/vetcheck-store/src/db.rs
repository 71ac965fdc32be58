//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, open_error, Result};
use rusqlite::Connection;

/// Open the SQLite database described by `config`, creating the file if absent
pub fn open(config: &StoreConfig) -> Result<Connection> {
    let conn = Connection::open(config.path()).map_err(|e| open_error(config.path(), e))?;
    configure(&conn, config)?;
    Ok(conn)
}

/// Apply per-connection settings
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.busy_timeout(config.busy_timeout)
        .map_err(from_rusqlite)?;
    Ok(())
}
