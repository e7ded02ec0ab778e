//! Configuration for the cstamp CLI.
//!
//! Handles loading and parsing the .cstamprc configuration file. Only
//! ambient behavior is configurable; the generated comment shapes are
//! fixed.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::logging::LogConfig;

/// Default .cstamprc file content with all settings documented.
const DEFAULT_CSTAMPRC: &str = r"# cstamp configuration file
# ==========================
# This file is read on startup.
# Lines starting with '#' are comments.
#
# Backup
# ------
# Write a <file>.bak copy before rewriting a file (true/false)
# backup = false

# Logging Configuration
# ---------------------
# Logs are stored in ~/.cstamp/logs/ with automatic cleanup.
#
# log_enabled = true       # Enable/disable file logging (true/false)
# log_level = info         # Log level: trace, debug, info, warn, error, off
# log_retention = 24       # Hours to keep log files (default: 24)
";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Write a `.bak` copy before rewriting a file.
    pub backup: bool,
    /// Logging configuration.
    pub log_config: LogConfig,
    /// Path to config file.
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup: false,
            log_config: LogConfig::default(),
            config_path: Self::default_config_path(),
        }
    }
}

impl Config {
    /// Returns the default config file path (~/.cstamprc).
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cstamprc")
    }

    /// Loads configuration from the default path, creating it if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns error if config cannot be read.
    pub fn load() -> io::Result<Self> {
        let path = Self::default_config_path();
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path.
    ///
    /// # Errors
    /// Returns error if config cannot be read.
    pub fn load_from(path: &PathBuf) -> io::Result<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self {
            config_path: path.clone(),
            ..Self::default()
        };
        config.parse(&content);

        Ok(config)
    }

    /// Creates the default config file.
    fn create_default_config(path: &PathBuf) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(DEFAULT_CSTAMPRC.as_bytes())?;
        Ok(())
    }

    /// Parses the config file content.
    fn parse(&mut self, content: &str) {
        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Remove inline comments
                let value = value.split('#').next().unwrap_or(value).trim();

                self.apply_setting(key, value);
            }
        }
    }

    /// Applies a single setting.
    fn apply_setting(&mut self, key: &str, value: &str) {
        match key {
            "backup" => {
                self.backup = matches!(value.to_lowercase().as_str(), "true" | "yes" | "1" | "on");
            }
            "log_enabled" => {
                self.log_config.enabled =
                    matches!(value.to_lowercase().as_str(), "true" | "yes" | "1" | "on");
            }
            "log_level" => {
                self.log_config.level = LogConfig::parse_level(value);
            }
            "log_retention" => {
                self.log_config.retention_hours = LogConfig::parse_retention(value);
            }
            _ => {
                tracing::debug!(key, "ignoring unknown config setting");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.backup);
        assert_eq!(config.log_config, LogConfig::default());
    }

    #[test]
    fn test_parse_settings() {
        let mut config = Config::default();
        config.parse("backup = true\nlog_level = debug\nlog_retention = 48\n");
        assert!(config.backup);
        assert_eq!(config.log_config.level, "debug");
        assert_eq!(config.log_config.retention_hours, 48);
    }

    #[test]
    fn test_parse_skips_comments_and_inline_comments() {
        let mut config = Config::default();
        config.parse("# backup = true\nlog_enabled = false  # no logs\n");
        assert!(!config.backup, "Commented line is ignored");
        assert!(!config.log_config.enabled);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut config = Config::default();
        config.parse("mystery = 42\n");
        assert!(!config.backup);
    }
}
