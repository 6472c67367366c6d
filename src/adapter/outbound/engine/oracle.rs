//! Oracle engine.

use std::collections::HashSet;

use crate::adapter::outbound::engine::source::Source;
use crate::domain::engine::EngineKind;
use crate::error::EngineError;

/// Aggregates the market-data sources.
#[derive(Debug, Clone)]
pub struct Oracle {
    sources: Vec<Source>,
}

impl Oracle {
    /// Build the oracle over a list of sources.
    ///
    /// # Errors
    /// Returns a validation error if the list is empty or names the same
    /// endpoint twice.
    pub fn new(sources: Vec<Source>) -> Result<Self, EngineError> {
        if sources.is_empty() {
            return Err(EngineError::validation(
                EngineKind::Oracle,
                "at least one source is required",
            ));
        }

        let mut seen = HashSet::new();
        for source in &sources {
            if !seen.insert(source.endpoint().as_str()) {
                return Err(EngineError::validation(
                    EngineKind::Oracle,
                    format!("duplicate source {source}"),
                ));
            }
        }

        Ok(Self { sources })
    }

    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }
}
