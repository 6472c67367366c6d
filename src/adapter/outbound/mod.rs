//! Outbound adapters (driven side).

pub mod engine;
pub mod file;
pub mod sqlite;
