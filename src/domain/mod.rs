//! Domain types shared by the startup phases.

pub mod configuration;
pub mod database;
pub mod engine;
pub mod metadata;

pub use configuration::{ConfigLookup, ConfigValue, Configuration};
pub use database::DatabaseConfig;
pub use engine::EngineKind;
pub use metadata::{MetadataRecord, SyncDirection, SyncState};
