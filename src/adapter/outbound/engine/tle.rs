//! Trade-logic engine (TLE).
//!
//! The TLE owns the bot's metadata record. It never syncs on its own: the
//! orchestrator decides when to pull from or push to storage.

use std::fmt;
use std::sync::Arc;

use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::domain::database::DatabaseConfig;
use crate::domain::engine::EngineKind;
use crate::domain::metadata::{MetadataRecord, SyncDirection};
use crate::error::{EngineError, MetadataError};
use crate::port::outbound::engine::MetadataSyncable;
use crate::port::outbound::metadata_store::MetadataStore;

/// TLE operating mode, selected by an integer flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TleMode {
    /// Observe only; no trade decisions.
    Passive,
    /// Make trade decisions.
    Active,
}

impl TleMode {
    /// Parse the integer mode flag.
    ///
    /// # Errors
    /// Returns a validation error for anything other than `0` or `1`.
    pub fn from_flag(flag: i64) -> Result<Self, EngineError> {
        match flag {
            0 => Ok(Self::Passive),
            1 => Ok(Self::Active),
            other => Err(EngineError::validation(
                EngineKind::Tle,
                format!("unsupported mode {other} (expected 0 or 1)"),
            )),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Passive => "passive",
            Self::Active => "active",
        }
    }
}

#[derive(Tabled)]
struct MetadataRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub struct Tle {
    mode: TleMode,
    metadata: Option<MetadataRecord>,
    store: Arc<dyn MetadataStore>,
}

impl Tle {
    /// Build the engine with its mode flag and metadata storage.
    ///
    /// # Errors
    /// Returns a validation error for an unsupported mode flag.
    pub fn new(mode: i64, store: Arc<dyn MetadataStore>) -> Result<Self, EngineError> {
        Ok(Self {
            mode: TleMode::from_flag(mode)?,
            metadata: None,
            store,
        })
    }

    #[must_use]
    pub fn mode(&self) -> TleMode {
        self.mode
    }
}

impl MetadataSyncable for Tle {
    fn sync_metadata(
        &mut self,
        db: &DatabaseConfig,
        direction: SyncDirection,
    ) -> Result<(), MetadataError> {
        debug!(owner = %db.owner(), mode = direction.flag(), "TLE metadata sync");
        db.ensure_addressable()?;
        match direction {
            SyncDirection::Pull => {
                let record = self.store.load(db)?;
                self.metadata = Some(record);
                Ok(())
            }
            SyncDirection::Push => {
                let record = self.metadata.as_ref().ok_or(MetadataError::Unloaded)?;
                self.store.save(db, record)
            }
        }
    }

    fn apply_default_metadata(&mut self) {
        self.metadata = Some(MetadataRecord::defaults());
    }

    fn metadata(&self) -> Option<&MetadataRecord> {
        self.metadata.as_ref()
    }
}

impl fmt::Display for Tle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mode: {}", self.mode.label())?;
        match &self.metadata {
            None => write!(f, "Metadata: not loaded"),
            Some(record) => {
                writeln!(f, "Metadata version: {}", record.version())?;
                let rows: Vec<MetadataRow> = record
                    .entries()
                    .map(|(key, value)| MetadataRow {
                        key: key.to_string(),
                        value: value.to_string(),
                    })
                    .collect();
                write!(f, "{}", Table::new(rows).with(Style::modern()))
            }
        }
    }
}

impl fmt::Debug for Tle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tle")
            .field("mode", &self.mode)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
