//! Runtime configuration for core callers.
//!
//! # Responsibility
//! - Resolve database and logging locations from the environment.
//!
//! # Invariants
//! - Blank or missing variables fall back to defaults; resolution never fails.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "PARCEL_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "PARCEL_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "PARCEL_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "parcel_tracker.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "parcel_tracker_logs";

/// Resolved configuration for opening the store and starting logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        Self {
            db_path: value(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: value(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: value(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
        }
    }
}
