#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use buffettbot::domain::database::DatabaseConfig;
use buffettbot::infrastructure::config::paths::ConfigLocations;
use tempfile::TempDir;

/// A throwaway configuration directory plus metadata database location.
pub struct ConfDir {
    dir: TempDir,
}

impl ConfDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp conf dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn locations(&self) -> ConfigLocations {
        ConfigLocations::in_dir(self.dir.path())
    }

    pub fn metadata_db(&self) -> PathBuf {
        self.dir.path().join("data").join("metadata.db")
    }

    /// Write a primary configuration pointing the metadata store into the
    /// temp dir. `extra` is appended verbatim.
    pub fn write_primary(&self, extra: &str) {
        let contents = format!(
            "log_level = \"warn\"\nmetadata_db = '{}'\n{extra}",
            self.metadata_db().display()
        );
        fs::write(self.locations().primary, contents).expect("write primary config");
    }

    pub fn write_secondary(&self, db: &DatabaseConfig) {
        let contents = format!(
            "{{\"host\": \"{}\", \"user\": \"{}\", \"password\": \"{}\"}}\n",
            db.host, db.user, db.password
        );
        fs::write(self.locations().secondary, contents).expect("write secondary config");
    }
}

pub fn db() -> DatabaseConfig {
    DatabaseConfig::new("db.local", "bot", "secret")
}
