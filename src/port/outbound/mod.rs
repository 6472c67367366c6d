//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: configuration files,
//! the operator console, progress notifications, engine construction and
//! metadata storage.

pub mod config_store;
pub mod engine;
pub mod metadata_store;
pub mod notifier;
pub mod prompt;
