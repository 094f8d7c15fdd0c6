//! Configuration module
//!
//! Settings are read from a TOML file (default `~/.config/courtside/config.toml`).
//! Every section has working defaults so a missing file or a partial file is
//! usable for development.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub reservation: ReservationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database URL (e.g., "sqlite://./courtside.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./courtside.db?mode=rwc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReservationSettings {
    /// Upper bound in seconds on waiting for a court's commit section.
    /// A request that exceeds it fails as retryable without touching the ledger.
    pub lock_timeout_secs: u64,
}

impl Default for ReservationSettings {
    fn default() -> Self {
        Self {
            lock_timeout_secs: 5,
        }
    }
}

impl ReservationSettings {
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_secs(self.lock_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("courtside")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert!(cfg.database.url.starts_with("sqlite://"));
        assert_eq!(cfg.reservation.lock_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn parses_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [database]
            url = "sqlite::memory:"

            [reservation]
            lock_timeout_secs = 2

            [logging]
            level = "debug"
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.reservation.lock_timeout_secs, 2);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [database]
            url = "sqlite::memory:"
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.reservation.lock_timeout_secs, 5);
    }

    #[test]
    fn default_path_ends_with_crate_dir() {
        let path = default_config_path();
        assert!(path.ends_with("courtside/config.toml"));
    }
}
