//! SQLite metadata store implementation.
//!
//! Persists the trade-logic engine's metadata record using SQLite and
//! Diesel ORM. One row per key; rows are scoped by the record owner.

use std::path::Path;

use diesel::prelude::*;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::{
    configure_sqlite_connection, create_pool, run_migrations, DbPool,
};
use crate::adapter::outbound::sqlite::database::model::MetadataRow;
use crate::adapter::outbound::sqlite::database::schema::metadata;
use crate::domain::database::DatabaseConfig;
use crate::domain::metadata::MetadataRecord;
use crate::error::{ConfigError, Error, MetadataError, Result};
use crate::infrastructure::config::settings::METADATA_DB_KEY;
use crate::port::outbound::metadata_store::MetadataStore;

/// SQLite-backed metadata store.
///
/// The SQLite backend does not authenticate; credentials only select the
/// record owner.
pub struct SqliteMetadataStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteMetadataStore {
    /// Create a store over an existing, migrated pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `path` and run migrations.
    ///
    /// # Errors
    /// Returns an error if the path is not valid UTF-8, or if the database
    /// cannot be opened or migrated.
    pub fn open(path: &Path) -> Result<Self> {
        let url = path.to_str().ok_or_else(|| ConfigError::InvalidValue {
            field: METADATA_DB_KEY.into(),
            reason: format!("path {} is not valid UTF-8", path.display()),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::open_url(url)
    }

    /// Open a database by SQLite URL (a file path or `:memory:`).
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_url(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url)?;
        run_migrations(&pool)?;
        {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
            configure_sqlite_connection(&mut conn)?;
        }
        Ok(Self::new(pool))
    }

    fn to_rows(
        owner: &str,
        record: &MetadataRecord,
    ) -> std::result::Result<Vec<MetadataRow>, MetadataError> {
        let version = i32::try_from(record.version()).map_err(|_| {
            MetadataError::Malformed(format!("version {} out of range", record.version()))
        })?;
        Ok(record
            .entries()
            .map(|(key, value)| MetadataRow {
                owner: owner.to_string(),
                key: key.to_string(),
                value: value.to_string(),
                version,
            })
            .collect())
    }

    fn from_rows(rows: Vec<MetadataRow>) -> std::result::Result<MetadataRecord, MetadataError> {
        let rows = rows
            .into_iter()
            .map(|row| {
                let version = u32::try_from(row.version).map_err(|_| {
                    MetadataError::Malformed(format!("negative version {}", row.version))
                })?;
                Ok((row.key, row.value, version))
            })
            .collect::<std::result::Result<Vec<_>, MetadataError>>()?;
        MetadataRecord::from_rows(rows)
    }
}

fn storage_error(err: impl std::fmt::Display) -> MetadataError {
    MetadataError::Storage(err.to_string())
}

impl MetadataStore for SqliteMetadataStore {
    fn load(&self, db: &DatabaseConfig) -> std::result::Result<MetadataRecord, MetadataError> {
        let owner = db.owner();
        let mut conn = self.pool.get().map_err(storage_error)?;

        let rows: Vec<MetadataRow> = metadata::table
            .filter(metadata::owner.eq(&owner))
            .order(metadata::key.asc())
            .select(MetadataRow::as_select())
            .load(&mut conn)
            .map_err(storage_error)?;

        if rows.is_empty() {
            return Err(MetadataError::NotFound { owner });
        }

        debug!(owner = %owner, rows = rows.len(), "Metadata loaded");
        Self::from_rows(rows)
    }

    fn save(
        &self,
        db: &DatabaseConfig,
        record: &MetadataRecord,
    ) -> std::result::Result<(), MetadataError> {
        let owner = db.owner();
        let rows = Self::to_rows(&owner, record)?;
        let mut conn = self.pool.get().map_err(storage_error)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(metadata::table.filter(metadata::owner.eq(&owner))).execute(conn)?;
            if !rows.is_empty() {
                diesel::insert_into(metadata::table)
                    .values(&rows)
                    .execute(conn)?;
            }
            Ok(())
        })
        .map_err(storage_error)?;

        debug!(owner = %owner, rows = rows.len(), "Metadata saved");
        Ok(())
    }
}
