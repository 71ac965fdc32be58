//! Injected diagnostics collaborator
//!
//! The store reports validation warnings, storage failures and lifecycle
//! messages through a `Diagnostics` handle it receives at construction rather
//! than through process-wide logging state. Production code passes
//! `TracingDiagnostics`; tests pass `RecordingDiagnostics` and inspect what
//! was reported.

use std::sync::Mutex;

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

/// Logging collaborator with info, warning and error levels
pub trait Diagnostics: Send + Sync {
    fn info(&self, op: &str, message: &str);
    fn warning(&self, op: &str, message: &str);
    fn error(&self, op: &str, message: &str);
}

const COMPONENT: &str = "vetcheck";

/// Forwards diagnostics to `tracing` with the canonical `op` field
///
/// Diagnostics come from both the model (`validate`) and the store, so events
/// carry the crate-wide component tag and the `op` tells them apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, op: &str, message: &str) {
        tracing::info!(component = COMPONENT, op = op, "{}", message);
    }

    fn warning(&self, op: &str, message: &str) {
        tracing::warn!(component = COMPONENT, op = op, "{}", message);
    }

    fn error(&self, op: &str, message: &str) {
        tracing::error!(component = COMPONENT, op = op, "{}", message);
    }
}

/// A single diagnostic kept by `RecordingDiagnostics`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub op: String,
    pub message: String,
}

/// Keeps every reported diagnostic in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Count entries at the given level
    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.entries().iter().filter(|d| d.level == level).count()
    }

    /// Count entries at the given level for one operation
    pub fn count_for(&self, level: DiagnosticLevel, op: &str) -> usize {
        self.entries()
            .iter()
            .filter(|d| d.level == level && d.op == op)
            .count()
    }

    pub fn clear(&self) {
        self.entries.lock().map(|mut e| e.clear()).ok();
    }

    fn push(&self, level: DiagnosticLevel, op: &str, message: &str) {
        self.entries
            .lock()
            .map(|mut entries| {
                entries.push(Diagnostic {
                    level,
                    op: op.to_string(),
                    message: message.to_string(),
                })
            })
            .ok();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn info(&self, op: &str, message: &str) {
        self.push(DiagnosticLevel::Info, op, message);
    }

    fn warning(&self, op: &str, message: &str) {
        self.push(DiagnosticLevel::Warning, op, message);
    }

    fn error(&self, op: &str, message: &str) {
        self.push(DiagnosticLevel::Error, op, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order_and_levels() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.info("initialize", "table ready");
        diagnostics.warning("delete_record", "no row with id 3");
        diagnostics.error("add_record", "disk full");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, DiagnosticLevel::Info);
        assert_eq!(entries[1].op, "delete_record");
        assert_eq!(entries[2].message, "disk full");
        assert_eq!(diagnostics.count(DiagnosticLevel::Warning), 1);
        assert_eq!(diagnostics.count_for(DiagnosticLevel::Error, "add_record"), 1);
        assert_eq!(diagnostics.count_for(DiagnosticLevel::Error, "get_record"), 0);
    }

    #[test]
    fn test_clear() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.warning("validate", "bad");
        diagnostics.clear();
        assert!(diagnostics.entries().is_empty());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let diagnostics: Box<dyn Diagnostics> = Box::new(TracingDiagnostics);
        diagnostics.info("noop", "no subscriber installed, nothing happens");
    }
}
