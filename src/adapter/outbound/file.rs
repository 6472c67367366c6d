//! File-backed configuration store.
//!
//! The serialization format follows the file extension: `.toml` files are
//! read and written as TOML, everything else as JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::configuration::Configuration;
use crate::error::ConfigError;
use crate::port::outbound::config_store::ConfigStore;

/// On-disk serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format for a location by its extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    fn decode(self, path: &Path, content: &str) -> Result<Configuration, ConfigError> {
        let parsed = match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn encode(self, config: &Configuration) -> Result<String, ConfigError> {
        match self {
            Self::Json => serde_json::to_string_pretty(config)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Toml => {
                toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
        }
    }
}

/// Configuration store backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigStore;

impl FileConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for FileConfigStore {
    fn read(&self, location: &Path) -> Result<Configuration, ConfigError> {
        let content = fs::read_to_string(location).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: location.to_path_buf(),
            },
            _ => ConfigError::ReadFile(e),
        })?;

        let format = ConfigFormat::for_path(location);
        let config = format.decode(location, &content)?;
        debug!(
            path = %location.display(),
            ?format,
            keys = config.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    fn write(&self, location: &Path, config: &Configuration) -> Result<(), ConfigError> {
        let content = ConfigFormat::for_path(location).encode(config)?;

        if let Some(parent) = location.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(ConfigError::WriteFile)?;
        }
        fs::write(location, content).map_err(ConfigError::WriteFile)?;

        debug!(path = %location.display(), keys = config.len(), "Configuration written");
        Ok(())
    }
}
