//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the startup phases and the outside world.
//! The application layer only talks to these traits, so every phase can be
//! driven by in-memory fakes in tests.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Config  │            │   Engine    │              │ Metadata  │
//! │  Store  │            │   Factory   │              │   Store   │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ConfigStore`] - Read and write named configuration blobs
//! - [`SecondaryConfigProvider`] - Supply missing database credentials
//! - [`EngineFactory`] - Construct the Source, Oracle, Stoc and Tle engines
//! - [`MetadataSyncable`] - Pull/push metadata on the trade-logic engine
//! - [`MetadataStore`] - Durable metadata storage used by the engine
//! - [`StartupNotifier`] - Progress and diagnostic events

pub mod outbound;

pub use outbound::config_store::ConfigStore;
pub use outbound::engine::{EngineFactory, MetadataSyncable};
pub use outbound::metadata_store::MetadataStore;
pub use outbound::notifier::{StartupEvent, StartupNotifier};
pub use outbound::prompt::SecondaryConfigProvider;
