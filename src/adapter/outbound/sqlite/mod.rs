//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed metadata store for the trade-logic engine
//! using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteMetadataStore;
