use std::path::PathBuf;

use thiserror::Error;

use crate::domain::engine::EngineKind;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("failed to write config file: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

impl ConfigError {
    /// True when the backing resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Engine construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{reason}")]
    Validation { engine: EngineKind, reason: String },
}

impl EngineError {
    /// Build a validation failure for the given engine.
    pub fn validation(engine: EngineKind, reason: impl Into<String>) -> Self {
        Self::Validation {
            engine,
            reason: reason.into(),
        }
    }

    /// Report the failure under `engine`, keeping the reason.
    #[must_use]
    pub fn attributed_to(self, engine: EngineKind) -> Self {
        match self {
            Self::Validation { reason, .. } => Self::Validation { engine, reason },
        }
    }

    /// The engine whose construction failed.
    #[must_use]
    pub fn engine(&self) -> EngineKind {
        match self {
            Self::Validation { engine, .. } => *engine,
        }
    }
}

/// Metadata synchronization errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The stored record exists but cannot be decoded.
    #[error("malformed metadata: {0}")]
    Malformed(String),

    /// No record exists yet for the owner.
    #[error("no metadata record found for {owner}")]
    NotFound { owner: String },

    /// The database configuration cannot address a record.
    #[error("database configuration has no {field}")]
    MissingCredential { field: String },

    /// The engine holds no metadata to push.
    #[error("no metadata loaded in engine")]
    Unloaded,

    #[error("metadata storage error: {0}")]
    Storage(String),
}

/// Fatal startup conditions. Each one ends the process with status 1.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("could not load main config data: {0}")]
    PrimaryConfig(#[source] ConfigError),

    #[error("could not resolve database config data: {0}")]
    SecondaryConfig(#[source] Box<Error>),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("unrecoverable startup fault: {0}")]
    Fault(#[source] Box<Error>),
}

impl StartupError {
    /// Component label used in the one-line diagnostic.
    #[must_use]
    pub fn component(&self) -> &'static str {
        match self {
            Self::PrimaryConfig(_) | Self::SecondaryConfig(_) => "Conf",
            Self::Engine(err) => err.engine().label(),
            Self::Fault(_) => "BuffettBot",
        }
    }

    pub(crate) fn secondary(err: impl Into<Error>) -> Self {
        Self::SecondaryConfig(Box::new(err.into()))
    }

    pub(crate) fn fault(err: impl Into<Error>) -> Self {
        Self::Fault(Box::new(err.into()))
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
