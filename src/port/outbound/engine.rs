//! Engine construction and metadata sync ports.
//!
//! The engines themselves are black boxes to the startup core. The launcher
//! only needs to build them in order, and the sync controller only needs the
//! trade-logic engine's pull/push/defaults capability.

use std::fmt::Display;

use crate::domain::database::DatabaseConfig;
use crate::domain::metadata::{MetadataRecord, SyncDirection};
use crate::error::{EngineError, MetadataError};

/// Builds the fixed engine set.
///
/// Every constructor either returns a live engine or a validation error;
/// there is no partially constructed state.
pub trait EngineFactory {
    type Source;
    type Oracle;
    type Stoc;
    type Tle: MetadataSyncable;

    /// Build a source enumerator for one endpoint identifier.
    fn source(&self, endpoint: &str) -> Result<Self::Source, EngineError>;

    /// Build the oracle over the given sources.
    fn oracle(&self, sources: Vec<Self::Source>) -> Result<Self::Oracle, EngineError>;

    /// Build the STOC engine with its boolean mode flag.
    fn stoc(&self, live: bool) -> Result<Self::Stoc, EngineError>;

    /// Build the trade-logic engine with its integer mode flag.
    fn tle(&self, mode: i64) -> Result<Self::Tle, EngineError>;
}

/// Metadata synchronization capability of the trade-logic engine.
///
/// The `Display` rendering is the human-readable state report.
pub trait MetadataSyncable: Display {
    /// Pull from storage into the engine, or push engine state to storage.
    ///
    /// A pull distinguishes [`MetadataError::NotFound`] (no record yet) from
    /// [`MetadataError::Malformed`] (stored data is invalid).
    fn sync_metadata(
        &mut self,
        db: &DatabaseConfig,
        direction: SyncDirection,
    ) -> Result<(), MetadataError>;

    /// Replace the engine's metadata with its in-memory defaults.
    fn apply_default_metadata(&mut self);

    /// Metadata currently held by the engine, if any.
    fn metadata(&self) -> Option<&MetadataRecord>;

    fn pull_metadata(&mut self, db: &DatabaseConfig) -> Result<(), MetadataError> {
        self.sync_metadata(db, SyncDirection::Pull)
    }

    fn push_metadata(&mut self, db: &DatabaseConfig) -> Result<(), MetadataError> {
        self.sync_metadata(db, SyncDirection::Push)
    }
}
