//! Application services (use cases).
//!
//! These services sequence the startup phases and coordinate adapters
//! through ports. Nothing here touches the filesystem, console or database
//! directly.

pub mod bootstrap;
pub mod context;
pub mod launcher;
pub mod metadata_sync;
pub mod orchestrator;
