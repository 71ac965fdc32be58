//! Repository layer for persisting check-in records to SQLite

pub mod checkup_store;
pub mod scoped;
pub mod sqlite_repo;

pub use checkup_store::CheckupStore;
pub use scoped::ScopedConnection;
pub use sqlite_repo::SqliteRepo;
