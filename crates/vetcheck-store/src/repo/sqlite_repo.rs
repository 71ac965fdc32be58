//! SQLite repository implementation
//!
//! Statement-level access to the checkups table. Each statement runs in
//! autocommit mode, so a successful call is already durable.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use vetcheck_core::model::CheckupRecord;

/// SQLite repository for check-in records
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert every field except `id` and return the assigned rowid
    pub fn insert_record(conn: &Connection, record: &CheckupRecord) -> Result<i64> {
        conn.execute(
            "INSERT INTO checkups (species, name, owner, age, checkup_reason)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                record.species,
                record.name,
                record.owner,
                record.age,
                record.checkup_reason,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a record from the database by ID
    pub fn get_record(conn: &Connection, id: i64) -> Result<Option<CheckupRecord>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, species, name, owner, age, checkup_reason FROM checkups WHERE id = ?",
            )
            .map_err(from_rusqlite)?;

        let result = stmt
            .query_row([id], |row| {
                let checkup_reason: Option<String> = row.get(5)?;
                Ok(CheckupRecord {
                    id: Some(row.get(0)?),
                    species: row.get(1)?,
                    name: row.get(2)?,
                    owner: row.get(3)?,
                    age: row.get(4)?,
                    checkup_reason: checkup_reason.unwrap_or_default(),
                })
            })
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Delete the row with the given ID, returning the number of rows removed
    pub fn delete_record(conn: &Connection, id: i64) -> Result<usize> {
        conn.execute("DELETE FROM checkups WHERE id = ?", [id])
            .map_err(from_rusqlite)
    }

    /// Count all rows
    pub fn count_records(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM checkups", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
