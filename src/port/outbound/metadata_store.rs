//! Metadata persistence port.

use crate::domain::database::DatabaseConfig;
use crate::domain::metadata::MetadataRecord;
use crate::error::MetadataError;

/// Durable storage for the trade-logic engine's metadata record.
///
/// Records are addressed by the connection credentials' owner.
pub trait MetadataStore: Send + Sync {
    /// Load the stored record.
    ///
    /// Fails with [`MetadataError::NotFound`] when no record exists and
    /// [`MetadataError::Malformed`] when stored data cannot be decoded.
    fn load(&self, db: &DatabaseConfig) -> Result<MetadataRecord, MetadataError>;

    /// Replace the stored record.
    fn save(&self, db: &DatabaseConfig, record: &MetadataRecord) -> Result<(), MetadataError>;
}
