//! Console commands
//!
//! `menu` owns the main loop and the boundary logging for each menu action;
//! `prompt` reads validated input; `render` formats everything printed.

pub mod menu;
pub mod prompt;
pub mod render;

use vetcheck_core::errors::{ExError, ExErrorKind};

pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for console reads and writes
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
