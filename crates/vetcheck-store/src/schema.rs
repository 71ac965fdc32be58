//! Table lifecycle for the `checkups` table
//!
//! The table moves from absent to existing exactly once; creating it again is
//! a no-op. There are no further schema versions.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

pub const CHECKUPS_TABLE: &str = "checkups";

const CREATE_CHECKUPS_TABLE: &str = "CREATE TABLE IF NOT EXISTS checkups (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    species TEXT NOT NULL,
    name TEXT NOT NULL,
    owner TEXT NOT NULL,
    age INTEGER NOT NULL,
    checkup_reason TEXT
)";

/// Create the checkups table if it doesn't exist
pub fn create_checkups_table(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_CHECKUPS_TABLE, [])
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Whether the checkups table is present
pub fn table_exists(conn: &Connection) -> Result<bool> {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [CHECKUPS_TABLE],
        |row| row.get::<_, i64>(0),
    )
    .map(|count| count > 0)
    .map_err(from_rusqlite)
}
