//! Store configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Database file used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "VetBase.db";

/// Default time a connection waits on a locked database file
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Settings for opening the backing SQLite file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
