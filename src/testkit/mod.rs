//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`config`] - In-memory [`ConfigStore`](crate::port::ConfigStore) and
//!   canonical test locations.
//! - [`prompt`] - `ScriptedPrompt`, a fixed answer set for the database prompt.
//! - [`notifier`] - `RecordingNotifier` for startup event assertions.
//! - [`engine`] - `RecordingEngineFactory` and `ScriptedTle` engine doubles.
//! - [`metadata`] - In-memory [`MetadataStore`](crate::port::MetadataStore).

pub mod config;
pub mod engine;
pub mod metadata;
pub mod notifier;
pub mod prompt;
