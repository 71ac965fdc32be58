//! Error handling for vetcheck-store
//!
//! Wraps vetcheck-core ExError with store-specific helpers

use std::path::Path;
use vetcheck_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an error for a database file that cannot be opened
pub fn open_error(path: &Path, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("open")
        .with_message(format!("cannot open {}: {}", path.display(), err))
}
