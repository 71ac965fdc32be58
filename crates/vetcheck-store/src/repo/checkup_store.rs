//! Check-in record store
//!
//! `CheckupStore` owns the checkups table lifecycle and the three record
//! operations. Only initialization propagates errors; add, get and delete
//! report storage failures through the injected `Diagnostics` and return a
//! sentinel (`None` / `false`).

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::errors::Result;
use crate::repo::scoped::ScopedConnection;
use crate::repo::sqlite_repo::SqliteRepo;
use crate::schema;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vetcheck_core::errors::{ExError, VetError};
use vetcheck_core::{CheckupRecord, Diagnostics};

pub struct CheckupStore {
    config: StoreConfig,
    diagnostics: Arc<dyn Diagnostics>,
    live_connections: AtomicUsize,
}

impl CheckupStore {
    /// Open the store and make sure the checkups table exists
    ///
    /// # Errors
    /// Returns a `Persistence` error when the database file cannot be opened
    /// or the table cannot be created. The store is unusable in that case.
    pub fn initialize(config: StoreConfig, diagnostics: Arc<dyn Diagnostics>) -> Result<Self> {
        let store = Self {
            config,
            diagnostics,
            live_connections: AtomicUsize::new(0),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the checkups table if absent; a no-op when it already exists
    ///
    /// # Errors
    /// Same as [`CheckupStore::initialize`].
    pub fn ensure_schema(&self) -> Result<()> {
        let result = self
            .connect("initialize")
            .and_then(|conn| schema::create_checkups_table(&conn));

        match result {
            Ok(()) => {
                self.diagnostics
                    .info("initialize", "Veterinary database table initialized successfully.");
                Ok(())
            }
            Err(err) => {
                let err = err.with_op("initialize");
                self.diagnostics
                    .error("initialize", &format!("Error creating database table: {}", err));
                Err(err)
            }
        }
    }

    /// Validate and insert a record, assigning its id
    ///
    /// Returns `None` both when validation fails and when the write fails;
    /// use [`CheckupStore::try_add_record`] to tell the two apart.
    pub fn add_record(&self, record: &mut CheckupRecord) -> Option<i64> {
        self.try_add_record(record).ok()
    }

    /// Validate and insert a record, reporting why it was not stored
    ///
    /// On success the assigned id is written onto `record` and returned.
    /// Any id the caller set beforehand is ignored by the insert.
    ///
    /// # Errors
    /// - `InvalidInput` when a required field is empty (nothing is written and
    ///   no connection is opened)
    /// - `Persistence` when the database rejects the write
    pub fn try_add_record(&self, record: &mut CheckupRecord) -> Result<i64> {
        if !record.validate(self.diagnostics.as_ref()) {
            let missing = record.missing_fields();
            return Err(ExError::from(VetError::InvalidRecord { missing }).with_op("add_record"));
        }

        let result = self
            .connect("add_record")
            .and_then(|conn| SqliteRepo::insert_record(&conn, &*record));

        match result {
            Ok(id) => {
                record.id = Some(id);
                self.diagnostics
                    .info("add_record", &format!("Added animal: {:?}", record));
                Ok(id)
            }
            Err(err) => {
                let err = err.with_op("add_record");
                self.diagnostics.error(
                    "add_record",
                    &format!("Error adding animal to database: {}", err),
                );
                Err(err)
            }
        }
    }

    /// Look up a record by id; `None` when absent or on storage failure
    pub fn get_record(&self, id: i64) -> Option<CheckupRecord> {
        let result = self
            .connect("get_record")
            .and_then(|conn| SqliteRepo::get_record(&conn, id));

        match result {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::debug!(record_id = id, "no record with this id");
                None
            }
            Err(err) => {
                self.diagnostics.error(
                    "get_record",
                    &format!(
                        "Error retrieving animal information: {}",
                        err.with_op("get_record").with_record_id(id)
                    ),
                );
                None
            }
        }
    }

    /// Remove a record; true iff exactly one row was deleted
    pub fn delete_record(&self, id: i64) -> bool {
        let result = self
            .connect("delete_record")
            .and_then(|conn| SqliteRepo::delete_record(&conn, id));

        match result {
            Ok(1) => {
                self.diagnostics
                    .info("delete_record", &format!("Discharged animal with ID: {}", id));
                true
            }
            Ok(0) => {
                self.diagnostics
                    .warning("delete_record", &format!("No animal found with ID: {}", id));
                false
            }
            Ok(rows) => {
                self.diagnostics.error(
                    "delete_record",
                    &format!("Expected one row for ID {}, deleted {}", id, rows),
                );
                false
            }
            Err(err) => {
                self.diagnostics.error(
                    "delete_record",
                    &format!(
                        "Error discharging animal: {}",
                        err.with_op("delete_record").with_record_id(id)
                    ),
                );
                false
            }
        }
    }

    /// Number of connections currently held by in-flight operations
    pub fn open_connections(&self) -> usize {
        self.live_connections.load(Ordering::SeqCst)
    }

    fn connect(&self, op: &'static str) -> Result<ScopedConnection<'_>> {
        ScopedConnection::acquire(&self.config, &self.live_connections, op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vetcheck_core::{DiagnosticLevel, RecordingDiagnostics};

    fn setup_store() -> (TempDir, CheckupStore, Arc<RecordingDiagnostics>) {
        let dir = TempDir::new().unwrap();
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let store = CheckupStore::initialize(
            StoreConfig::new(dir.path().join("unit.db")),
            diagnostics.clone(),
        )
        .unwrap();
        (dir, store, diagnostics)
    }

    #[test]
    fn test_initialize_reports_info() {
        let (_dir, store, diagnostics) = setup_store();
        assert_eq!(diagnostics.count_for(DiagnosticLevel::Info, "initialize"), 1);
        assert_eq!(store.open_connections(), 0);
    }

    #[test]
    fn test_add_assigns_id_onto_record() {
        let (_dir, store, _diagnostics) = setup_store();
        let mut record = CheckupRecord::new("Dog", "Rex", "Ana", 4, "vaccination");

        let id = store.add_record(&mut record);

        assert_eq!(id, Some(1));
        assert_eq!(record.id, Some(1));
    }

    #[test]
    fn test_invalid_record_skips_connection() {
        let (_dir, store, diagnostics) = setup_store();
        let mut record = CheckupRecord::new("Dog", "", "Ana", 4, "vaccination");

        assert_eq!(store.add_record(&mut record), None);
        assert_eq!(record.id, None);
        assert_eq!(diagnostics.count_for(DiagnosticLevel::Warning, "validate"), 1);
        assert_eq!(diagnostics.count(DiagnosticLevel::Error), 0);
        assert_eq!(store.open_connections(), 0);
    }

    #[test]
    fn test_delete_unknown_warns() {
        let (_dir, store, diagnostics) = setup_store();
        assert!(!store.delete_record(9999));
        assert_eq!(
            diagnostics.count_for(DiagnosticLevel::Warning, "delete_record"),
            1
        );
    }

    #[test]
    fn test_get_unknown_is_not_an_error() {
        let (_dir, store, diagnostics) = setup_store();
        assert!(store.get_record(3).is_none());
        assert_eq!(diagnostics.count(DiagnosticLevel::Error), 0);
    }
}
