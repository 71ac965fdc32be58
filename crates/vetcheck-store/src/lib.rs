//! VetCheck Store - SQLite persistence for check-in records
//!
//! Provides:
//! - Store configuration (database path, busy timeout)
//! - Idempotent creation of the `checkups` table
//! - Scoped, per-operation connections with guaranteed release
//! - `CheckupStore`: add / get / delete with sentinel results

pub mod config;
pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use config::StoreConfig;
pub use errors::Result;
pub use repo::{CheckupStore, ScopedConnection};
