//! In-memory metadata store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::database::DatabaseConfig;
use crate::domain::metadata::MetadataRecord;
use crate::error::MetadataError;
use crate::port::outbound::metadata_store::MetadataStore;

#[derive(Debug, Clone)]
enum Stored {
    Record(MetadataRecord),
    Malformed,
}

/// A [`MetadataStore`] keyed by record owner.
#[derive(Debug, Default)]
pub struct MemoryMetadataStore {
    records: Mutex<HashMap<String, Stored>>,
    saves: AtomicUsize,
}

impl MemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored record for the owner of `db`.
    pub fn seeded(self, db: &DatabaseConfig, record: MetadataRecord) -> Self {
        self.records
            .lock()
            .expect("lock metadata records")
            .insert(db.owner(), Stored::Record(record));
        self
    }

    /// Seed a stored record that fails to decode.
    pub fn with_malformed(self, db: &DatabaseConfig) -> Self {
        self.records
            .lock()
            .expect("lock metadata records")
            .insert(db.owner(), Stored::Malformed);
        self
    }

    /// The record currently stored for the owner of `db`.
    pub fn stored(&self, db: &DatabaseConfig) -> Option<MetadataRecord> {
        match self
            .records
            .lock()
            .expect("lock metadata records")
            .get(&db.owner())
        {
            Some(Stored::Record(record)) => Some(record.clone()),
            _ => None,
        }
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl MetadataStore for MemoryMetadataStore {
    fn load(&self, db: &DatabaseConfig) -> Result<MetadataRecord, MetadataError> {
        let owner = db.owner();
        match self
            .records
            .lock()
            .expect("lock metadata records")
            .get(&owner)
        {
            Some(Stored::Record(record)) => Ok(record.clone()),
            Some(Stored::Malformed) => Err(MetadataError::Malformed(format!(
                "corrupt record for {owner}"
            ))),
            None => Err(MetadataError::NotFound { owner }),
        }
    }

    fn save(&self, db: &DatabaseConfig, record: &MetadataRecord) -> Result<(), MetadataError> {
        self.records
            .lock()
            .expect("lock metadata records")
            .insert(db.owner(), Stored::Record(record.clone()));
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
