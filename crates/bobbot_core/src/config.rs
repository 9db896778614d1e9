//! Runtime configuration for the task bot.
//!
//! # Responsibility
//! - Resolve the data file path and logging settings from the environment.
//!
//! # Invariants
//! - Resolution never fails; blank or missing values fall back to defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the task file path.
pub const DATA_FILE_ENV: &str = "BOBBOT_DATA_FILE";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "BOBBOT_LOG_LEVEL";
/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "BOBBOT_LOG_DIR";

const DEFAULT_DATA_FILE: &str = "data/bobbot.txt";
const DEFAULT_LOG_DIR_NAME: &str = "bobbot-logs";

/// Resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl BotConfig {
    /// Reads overrides from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, one call per variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            data_file: non_blank(DATA_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BotConfig, DATA_FILE_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn empty_environment_uses_defaults() {
        let config = BotConfig::from_lookup(|_| None);
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.data_file, PathBuf::from("data/bobbot.txt"));
    }

    #[test]
    fn overrides_are_trimmed_and_blank_values_ignored() {
        let vars = HashMap::from([
            (DATA_FILE_ENV, " /tmp/tasks.txt ".to_string()),
            (LOG_LEVEL_ENV, "warn".to_string()),
            (LOG_DIR_ENV, "   ".to_string()),
        ]);
        let config = BotConfig::from_lookup(|key| vars.get(key).cloned());

        assert_eq!(config.data_file, PathBuf::from("/tmp/tasks.txt"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, BotConfig::default().log_dir);
    }
}
