//! In-memory configuration store and canonical test locations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::configuration::Configuration;
use crate::error::ConfigError;
use crate::infrastructure::config::paths::ConfigLocations;
use crate::port::outbound::config_store::ConfigStore;

/// Locations under a fixed, never-touched directory.
pub fn locations() -> ConfigLocations {
    ConfigLocations::in_dir("/buffettbot-test/conf")
}

#[derive(Debug, Clone)]
enum Stored {
    Valid(Configuration),
    Malformed,
}

/// A [`ConfigStore`] backed by a map. Absent paths read as not found.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: Mutex<HashMap<PathBuf, Stored>>,
    writes: AtomicUsize,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a readable configuration.
    pub fn with(self, location: &Path, config: Configuration) -> Self {
        self.entries
            .lock()
            .expect("lock config entries")
            .insert(location.to_path_buf(), Stored::Valid(config));
        self
    }

    /// Seed a resource that exists but fails to parse.
    pub fn with_malformed(self, location: &Path) -> Self {
        self.entries
            .lock()
            .expect("lock config entries")
            .insert(location.to_path_buf(), Stored::Malformed);
        self
    }

    /// Number of successful `write` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current readable content at `location`.
    pub fn get(&self, location: &Path) -> Option<Configuration> {
        match self
            .entries
            .lock()
            .expect("lock config entries")
            .get(location)
        {
            Some(Stored::Valid(config)) => Some(config.clone()),
            _ => None,
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read(&self, location: &Path) -> Result<Configuration, ConfigError> {
        match self
            .entries
            .lock()
            .expect("lock config entries")
            .get(location)
        {
            Some(Stored::Valid(config)) => Ok(config.clone()),
            Some(Stored::Malformed) => Err(ConfigError::Parse {
                path: location.to_path_buf(),
                reason: "unexpected end of input".into(),
            }),
            None => Err(ConfigError::NotFound {
                path: location.to_path_buf(),
            }),
        }
    }

    fn write(&self, location: &Path, config: &Configuration) -> Result<(), ConfigError> {
        self.entries
            .lock()
            .expect("lock config entries")
            .insert(location.to_path_buf(), Stored::Valid(config.clone()));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
