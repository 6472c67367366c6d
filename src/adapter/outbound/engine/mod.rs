//! Concrete engines and the factory that builds them.

pub mod oracle;
pub mod source;
pub mod stoc;
pub mod tle;

use std::sync::Arc;

use crate::error::EngineError;
use crate::port::outbound::engine::EngineFactory;
use crate::port::outbound::metadata_store::MetadataStore;

pub use oracle::Oracle;
pub use source::Source;
pub use stoc::{Stoc, StocMode};
pub use tle::{Tle, TleMode};

/// Builds the production engines.
///
/// The trade-logic engine receives the shared metadata store.
pub struct DefaultEngineFactory {
    metadata_store: Arc<dyn MetadataStore>,
}

impl DefaultEngineFactory {
    #[must_use]
    pub fn new(metadata_store: Arc<dyn MetadataStore>) -> Self {
        Self { metadata_store }
    }
}

impl EngineFactory for DefaultEngineFactory {
    type Source = Source;
    type Oracle = Oracle;
    type Stoc = Stoc;
    type Tle = Tle;

    fn source(&self, endpoint: &str) -> Result<Source, EngineError> {
        Source::new(endpoint)
    }

    fn oracle(&self, sources: Vec<Source>) -> Result<Oracle, EngineError> {
        Oracle::new(sources)
    }

    fn stoc(&self, live: bool) -> Result<Stoc, EngineError> {
        Ok(Stoc::new(live))
    }

    fn tle(&self, mode: i64) -> Result<Tle, EngineError> {
        Tle::new(mode, Arc::clone(&self.metadata_store))
    }
}
