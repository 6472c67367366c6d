//! Typed view of the primary application configuration.
//!
//! The primary configuration is a flat key/value file. Every key is optional;
//! the defaults reproduce the fixed startup sequence (one source endpoint,
//! STOC in paper mode, TLE in active mode).
//!
//! ```toml
//! log_level = "info"
//! log_format = "pretty"
//! source_endpoints = "https://www.carlso.net/"
//! stoc_mode = false
//! tle_mode = 1
//! metadata_db = "/opt/buffettbot/data/metadata.db"
//! ```

use std::path::PathBuf;

use super::logging::{LogFormat, LoggingConfig};
use super::paths::DEFAULT_METADATA_DB;
use crate::domain::configuration::Configuration;
use crate::error::ConfigError;

pub const LOG_LEVEL_KEY: &str = "log_level";
pub const LOG_FORMAT_KEY: &str = "log_format";
pub const SOURCE_ENDPOINTS_KEY: &str = "source_endpoints";
pub const STOC_MODE_KEY: &str = "stoc_mode";
pub const TLE_MODE_KEY: &str = "tle_mode";
pub const METADATA_DB_KEY: &str = "metadata_db";

/// Endpoint seeded into the source enumerator when none is configured.
pub const DEFAULT_SOURCE_ENDPOINT: &str = "https://www.carlso.net/";

/// Settings resolved from the primary configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub logging: LoggingConfig,
    /// Endpoint identifiers for the source enumerators, in order.
    pub source_endpoints: Vec<String>,
    /// STOC mode flag.
    pub stoc_live: bool,
    /// TLE mode flag.
    pub tle_mode: i64,
    /// SQLite database holding engine metadata.
    pub metadata_db: PathBuf,
}

impl Settings {
    /// Extract settings, applying defaults for absent keys.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when a key has the wrong type or
    /// the endpoint list is blank.
    pub fn from_configuration(config: &Configuration) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let logging = LoggingConfig {
            level: config
                .get_str(LOG_LEVEL_KEY)?
                .map_or(defaults.logging.level, str::to_string),
            format: config
                .get_str(LOG_FORMAT_KEY)?
                .map_or(defaults.logging.format, LogFormat::parse),
        };

        let source_endpoints = match config.get_str(SOURCE_ENDPOINTS_KEY)? {
            Some(raw) => parse_endpoints(raw)?,
            None => defaults.source_endpoints,
        };

        Ok(Self {
            logging,
            source_endpoints,
            stoc_live: config.get_bool(STOC_MODE_KEY)?.unwrap_or(defaults.stoc_live),
            tle_mode: config.get_i64(TLE_MODE_KEY)?.unwrap_or(defaults.tle_mode),
            metadata_db: config
                .get_str(METADATA_DB_KEY)?
                .map_or(defaults.metadata_db, PathBuf::from),
        })
    }
}

fn parse_endpoints(raw: &str) -> Result<Vec<String>, ConfigError> {
    let endpoints: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if endpoints.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: SOURCE_ENDPOINTS_KEY.to_string(),
            reason: "at least one endpoint is required".to_string(),
        });
    }
    Ok(endpoints)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            source_endpoints: vec![DEFAULT_SOURCE_ENDPOINT.to_string()],
            stoc_live: false,
            tle_mode: 1,
            metadata_db: PathBuf::from(DEFAULT_METADATA_DB),
        }
    }
}
