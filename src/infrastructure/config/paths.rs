//! Well-known configuration locations.
//!
//! Everything lives under the configuration directory, `/opt/buffettbot/conf`
//! unless `BUFFETTBOT_CONF_DIR` says otherwise:
//! - `buffettbot.toml` - primary application configuration (must pre-exist)
//! - `db.json` - database connection configuration (generated on first run)

use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const CONF_DIR_ENV: &str = "BUFFETTBOT_CONF_DIR";

/// Default configuration directory.
pub const DEFAULT_CONF_DIR: &str = "/opt/buffettbot/conf";

pub const PRIMARY_FILE: &str = "buffettbot.toml";
pub const SECONDARY_FILE: &str = "db.json";

/// Default SQLite database for engine metadata.
pub const DEFAULT_METADATA_DB: &str = "/opt/buffettbot/data/metadata.db";

/// Locations of the primary and secondary configuration resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocations {
    pub primary: PathBuf,
    pub secondary: PathBuf,
}

impl ConfigLocations {
    /// Locations inside the given configuration directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            primary: dir.join(PRIMARY_FILE),
            secondary: dir.join(SECONDARY_FILE),
        }
    }

    /// Locations from `BUFFETTBOT_CONF_DIR`, falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(CONF_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::in_dir(dir),
            _ => Self::default(),
        }
    }
}

impl Default for ConfigLocations {
    fn default() -> Self {
        Self::in_dir(DEFAULT_CONF_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locations_are_under_opt() {
        let locations = ConfigLocations::default();
        assert_eq!(
            locations.primary,
            PathBuf::from("/opt/buffettbot/conf/buffettbot.toml")
        );
        assert_eq!(
            locations.secondary,
            PathBuf::from("/opt/buffettbot/conf/db.json")
        );
    }

    #[test]
    fn in_dir_joins_file_names() {
        let locations = ConfigLocations::in_dir("/tmp/bb");
        assert!(locations.primary.ends_with(PRIMARY_FILE));
        assert!(locations.secondary.starts_with("/tmp/bb"));
    }
}
