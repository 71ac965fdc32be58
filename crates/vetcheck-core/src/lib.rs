//! VetCheck Core - check-in record model and shared facilities
//!
//! This crate provides the pieces every other VetCheck crate builds on:
//! - The `CheckupRecord` model and its validation rule
//! - The species enumeration offered by the console
//! - The canonical error facility (`ExError`, `ExErrorKind`, `VetError`)
//! - The injected `Diagnostics` collaborator used by the store
//! - The structured logging facility (init profiles, boundary macros, test capture)

pub mod diagnostics;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diagnostics::{
    Diagnostic, DiagnosticLevel, Diagnostics, RecordingDiagnostics, TracingDiagnostics,
};
pub use errors::{ExError, ExErrorKind, Result, VetError};
pub use model::{CheckupRecord, Species};
