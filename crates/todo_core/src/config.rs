//! Process configuration resolved from environment variables.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - Resolution never fails; validation of the log settings happens in
//!   [`crate::logging::init_logging`].

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "TODO_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "lists.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Store file. Relative paths resolve against the working directory.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Rolling log directory. `None` leaves logging disabled.
    pub log_dir: Option<String>,
}

impl Config {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV),
        }
    }
}
