//! Configuration persistence port.

use std::path::Path;

use crate::domain::configuration::{ConfigLookup, Configuration};
use crate::error::ConfigError;

/// Loads and persists named configuration blobs.
pub trait ConfigStore {
    /// Read the configuration at `location`.
    ///
    /// Fails with [`ConfigError::NotFound`] when the resource does not exist;
    /// any other failure is a read or format error.
    fn read(&self, location: &Path) -> Result<Configuration, ConfigError>;

    /// Persist `config` at `location`, replacing existing content.
    fn write(&self, location: &Path, config: &Configuration) -> Result<(), ConfigError>;

    /// Read the configuration, mapping absence to [`ConfigLookup::NotFound`].
    fn lookup(&self, location: &Path) -> Result<ConfigLookup, ConfigError> {
        match self.read(location) {
            Ok(config) => Ok(ConfigLookup::Found(config)),
            Err(ConfigError::NotFound { path }) => Ok(ConfigLookup::NotFound(path)),
            Err(err) => Err(err),
        }
    }
}
