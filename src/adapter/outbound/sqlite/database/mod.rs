//! Diesel plumbing for the metadata database: pool and migrations,
//! the `metadata` table schema and its row type.

pub mod connection;
pub mod model;
pub mod schema;
