//! Command-line and environment configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use vetcheck_core::logging_facility::Profile;
use vetcheck_store::config::DEFAULT_DB_PATH;
use vetcheck_store::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "vetcheck")]
#[command(about = "VetCheck - Veterinary check-in system", long_about = None)]
pub struct Cli {
    /// SQLite database file (created if absent)
    #[arg(long, env = "VETCHECK_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Log output format
    #[arg(
        long,
        env = "VETCHECK_LOG_PROFILE",
        value_enum,
        default_value_t = LogProfile::Development
    )]
    pub log_profile: LogProfile,

    /// How long a connection waits on a locked database, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub busy_timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    /// Human-readable logs on stderr
    Development,
    /// JSON logs on stderr
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.db).with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vetcheck"]).unwrap();
        // VETCHECK_DB may be set in the environment running the tests
        if std::env::var_os("VETCHECK_DB").is_none() {
            assert_eq!(cli.db, PathBuf::from("VetBase.db"));
        }
        assert_eq!(cli.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_flags_map_to_store_config() {
        let cli = Cli::try_parse_from([
            "vetcheck",
            "--db",
            "/tmp/clinic.db",
            "--log-profile",
            "production",
            "--busy-timeout-ms",
            "250",
        ])
        .unwrap();

        let config = cli.store_config();
        assert_eq!(config.path, PathBuf::from("/tmp/clinic.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert_eq!(Profile::from(cli.log_profile), Profile::Production);
    }

    #[test]
    fn test_unknown_profile_rejected() {
        assert!(Cli::try_parse_from(["vetcheck", "--log-profile", "verbose"]).is_err());
    }
}
