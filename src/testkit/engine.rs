//! Engine doubles.
//!
//! - [`RecordingEngineFactory`] - Builds the production engines over an
//!   in-memory metadata store, records construction order, and can be told
//!   to fail at a given engine.
//! - [`ScriptedTle`] - A trade-logic engine with scripted pull and push
//!   outcomes, for sync paths a real store cannot easily produce.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::adapter::outbound::engine::{Oracle, Source, Stoc, Tle};
use crate::domain::database::DatabaseConfig;
use crate::domain::engine::EngineKind;
use crate::domain::metadata::{MetadataRecord, SyncDirection};
use crate::error::{EngineError, MetadataError};
use crate::port::outbound::engine::{EngineFactory, MetadataSyncable};

use super::metadata::MemoryMetadataStore;

/// Engine factory that records every successful construction.
#[derive(Clone)]
pub struct RecordingEngineFactory {
    constructed: Arc<Mutex<Vec<EngineKind>>>,
    fail_at: Option<EngineKind>,
    metadata_store: Arc<MemoryMetadataStore>,
}

impl Default for RecordingEngineFactory {
    fn default() -> Self {
        Self::with_store(Arc::new(MemoryMetadataStore::new()))
    }
}

impl RecordingEngineFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the trade-logic engine over an existing store.
    pub fn with_store(metadata_store: Arc<MemoryMetadataStore>) -> Self {
        Self {
            constructed: Arc::new(Mutex::new(Vec::new())),
            fail_at: None,
            metadata_store,
        }
    }

    /// A factory whose constructor for `kind` always fails validation.
    pub fn failing_at(kind: EngineKind) -> Self {
        Self {
            fail_at: Some(kind),
            ..Self::default()
        }
    }

    /// Successfully constructed engines, in order.
    pub fn constructed(&self) -> Vec<EngineKind> {
        self.constructed
            .lock()
            .expect("lock constructed engines")
            .clone()
    }

    pub fn metadata_store(&self) -> &Arc<MemoryMetadataStore> {
        &self.metadata_store
    }

    fn record<T>(
        &self,
        kind: EngineKind,
        build: impl FnOnce() -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        if self.fail_at == Some(kind) {
            return Err(EngineError::validation(kind, "scripted failure"));
        }
        let engine = build()?;
        self.constructed
            .lock()
            .expect("lock constructed engines")
            .push(kind);
        Ok(engine)
    }
}

impl EngineFactory for RecordingEngineFactory {
    type Source = Source;
    type Oracle = Oracle;
    type Stoc = Stoc;
    type Tle = Tle;

    fn source(&self, endpoint: &str) -> Result<Source, EngineError> {
        self.record(EngineKind::Source, || Source::new(endpoint))
    }

    fn oracle(&self, sources: Vec<Source>) -> Result<Oracle, EngineError> {
        self.record(EngineKind::Oracle, || Oracle::new(sources))
    }

    fn stoc(&self, live: bool) -> Result<Stoc, EngineError> {
        self.record(EngineKind::Stoc, || Ok(Stoc::new(live)))
    }

    fn tle(&self, mode: i64) -> Result<Tle, EngineError> {
        let store = Arc::clone(&self.metadata_store);
        self.record(EngineKind::Tle, || Tle::new(mode, store))
    }
}

#[derive(Debug, Clone)]
enum PullScript {
    Found(MetadataRecord),
    NotFound,
    Malformed,
}

/// Trade-logic engine with scripted storage outcomes.
#[derive(Debug, Clone)]
pub struct ScriptedTle {
    pull: PullScript,
    push_fails: bool,
    metadata: Option<MetadataRecord>,
    pushed: Vec<MetadataRecord>,
}

impl ScriptedTle {
    fn scripted(pull: PullScript) -> Self {
        Self {
            pull,
            push_fails: false,
            metadata: None,
            pushed: Vec::new(),
        }
    }

    /// Pulls succeed with `record`.
    pub fn found(record: MetadataRecord) -> Self {
        Self::scripted(PullScript::Found(record))
    }

    /// Pulls report that no record exists.
    pub fn not_found() -> Self {
        Self::scripted(PullScript::NotFound)
    }

    /// Pulls report a malformed record.
    pub fn malformed() -> Self {
        Self::scripted(PullScript::Malformed)
    }

    /// Every push fails with a storage error.
    pub fn failing_push(mut self) -> Self {
        self.push_fails = true;
        self
    }

    /// Records accepted by push, in order.
    pub fn pushed(&self) -> &[MetadataRecord] {
        &self.pushed
    }
}

impl MetadataSyncable for ScriptedTle {
    fn sync_metadata(
        &mut self,
        db: &DatabaseConfig,
        direction: SyncDirection,
    ) -> Result<(), MetadataError> {
        match direction {
            SyncDirection::Pull => match &self.pull {
                PullScript::Found(record) => {
                    self.metadata = Some(record.clone());
                    Ok(())
                }
                PullScript::NotFound => Err(MetadataError::NotFound { owner: db.owner() }),
                PullScript::Malformed => Err(MetadataError::Malformed("scripted".into())),
            },
            SyncDirection::Push => {
                if self.push_fails {
                    return Err(MetadataError::Storage("database is locked".into()));
                }
                let record = self.metadata.clone().ok_or(MetadataError::Unloaded)?;
                self.pushed.push(record);
                Ok(())
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

impl fmt::Display for ScriptedTle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.metadata {
            Some(record) => write!(f, "scripted metadata v{} ({} keys)", record.version(), record.len()),
            None => write!(f, "scripted metadata not loaded"),
        }
    }
}
