//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: typed settings, well-known locations, logging setup and
//! the composition root that wires concrete adapters together.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for the engine factory
//! - [`config`] - Settings, paths and logging initialization

pub mod bootstrap;
pub mod config;

pub use config::paths::ConfigLocations;
pub use config::settings::Settings;
