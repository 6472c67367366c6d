//! BuffettBot - bootstrap and orchestration controller.
//!
//! This crate resolves the bot's configuration, starts the trading engines
//! in their fixed order, and reconciles the trade-logic engine's persisted
//! metadata with its in-memory defaults.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Configuration maps, database credentials, metadata records
//!   and the sync state machine.
//! - **`port`** - Capability traits the application layer depends on:
//!   configuration storage, the interactive credential provider, engine
//!   construction, and metadata storage.
//! - **`application`** - The startup phases: [`application::bootstrap`],
//!   [`application::launcher`], [`application::metadata_sync`] and the
//!   [`application::orchestrator`] that sequences them.
//! - **`adapter`** - File-backed configuration store, SQLite metadata store,
//!   concrete engines and the console front end.
//! - **`infrastructure`** - Typed settings, well-known paths and logging.
//!
//! # Example
//!
//! ```no_run
//! use buffettbot::adapter::inbound::cli::{ConsoleNotifier, ConsolePrompt};
//! use buffettbot::adapter::outbound::file::FileConfigStore;
//! use buffettbot::application::orchestrator::Orchestrator;
//! use buffettbot::infrastructure::bootstrap::build_engine_factory;
//! use buffettbot::infrastructure::config::paths::ConfigLocations;
//!
//! let store = FileConfigStore::new();
//! let prompt = ConsolePrompt::new();
//! let notifier = ConsoleNotifier::new();
//! let status = Orchestrator::new(&store, &prompt, &notifier, ConfigLocations::from_env())
//!     .run(build_engine_factory);
//! std::process::exit(status.code());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
