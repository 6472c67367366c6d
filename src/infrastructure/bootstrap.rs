//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::engine::DefaultEngineFactory;
use crate::adapter::outbound::sqlite::SqliteMetadataStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;
use crate::port::outbound::metadata_store::MetadataStore;

/// Open the SQLite metadata store named by the settings.
pub(crate) fn init_metadata_store(settings: &Settings) -> Result<Arc<dyn MetadataStore>> {
    let store = SqliteMetadataStore::open(&settings.metadata_db)?;
    info!(path = %settings.metadata_db.display(), "Metadata store opened");
    Ok(Arc::new(store))
}

/// Build the production engine factory from resolved settings.
///
/// # Errors
/// Returns an error if the metadata database cannot be opened or migrated.
pub fn build_engine_factory(settings: &Settings) -> Result<DefaultEngineFactory> {
    Ok(DefaultEngineFactory::new(init_metadata_store(settings)?))
}
