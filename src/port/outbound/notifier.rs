//! Notifier port for startup progress events.
//!
//! The startup phases never print directly; they emit events and the
//! inbound adapter decides how to present them.

use std::path::PathBuf;

use crate::domain::engine::EngineKind;

/// Events raised while the bot starts up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupEvent {
    /// The orchestrator began a run.
    Started {
        /// Application version.
        version: String,
    },
    /// No secondary configuration exists; credentials will be collected.
    SecondaryConfigMissing { path: PathBuf },
    /// A generated secondary configuration was persisted.
    SecondaryConfigSaved { path: PathBuf },
    /// An engine is about to be constructed.
    EngineStarting(EngineKind),
    /// An engine is live.
    EngineStarted(EngineKind),
    /// Stored metadata was loaded into the trade-logic engine.
    MetadataPulled,
    /// Stored metadata exists but could not be used.
    MetadataRejected { reason: String },
    /// No stored metadata exists; defaults will be created.
    MetadataMissing,
    /// A metadata push failed. Never fatal.
    MetadataPushFailed { reason: String },
    /// Human-readable rendering of the trade-logic engine state.
    MetadataReport { rendered: String },
    /// A fatal condition; the process exits with status 1.
    Fatal { component: String, message: String },
    /// The run completed successfully.
    Finished,
}

/// Receives startup events.
pub trait StartupNotifier {
    fn notify(&self, event: StartupEvent);
}
