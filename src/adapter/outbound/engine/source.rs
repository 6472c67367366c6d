//! Source enumerator engine.

use std::fmt;

use url::Url;

use crate::domain::engine::EngineKind;
use crate::error::EngineError;

/// A market-data source identified by its endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    endpoint: Url,
}

impl Source {
    /// Build a source from an endpoint identifier.
    ///
    /// # Errors
    /// Returns a validation error unless the endpoint is an absolute
    /// `http`/`https` URL with a host.
    pub fn new(endpoint: &str) -> Result<Self, EngineError> {
        let url = Url::parse(endpoint.trim()).map_err(|e| {
            EngineError::validation(
                EngineKind::Source,
                format!("invalid endpoint '{endpoint}': {e}"),
            )
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(EngineError::validation(
                EngineKind::Source,
                format!("unsupported scheme '{}' in '{endpoint}'", url.scheme()),
            ));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(EngineError::validation(
                EngineKind::Source,
                format!("endpoint '{endpoint}' has no host"),
            ));
        }

        Ok(Self { endpoint: url })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint)
    }
}
