//! Process-wide startup state.
//!
//! The orchestrator builds a [`BotContext`] once and hands it to each phase
//! by reference. Configuration is immutable after the bootstrap phase.

use crate::domain::configuration::Configuration;
use crate::domain::database::DatabaseConfig;
use crate::domain::metadata::SyncState;
use crate::infrastructure::config::settings::Settings;
use crate::port::outbound::engine::EngineFactory;

/// Output of the configuration bootstrap phase.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Raw primary configuration.
    pub primary: Configuration,
    /// Typed view of the primary configuration.
    pub settings: Settings,
    /// Database connection data from the secondary configuration.
    pub database: DatabaseConfig,
    /// True when the secondary configuration was generated during this run.
    pub database_generated: bool,
}

/// The live engine set. Engines are never rebuilt once constructed.
pub struct EngineSet<F: EngineFactory> {
    pub oracle: F::Oracle,
    pub stoc: F::Stoc,
    pub tle: F::Tle,
}

/// Everything the orchestrator owns for the lifetime of the process.
pub struct BotContext<F: EngineFactory> {
    config: ResolvedConfig,
    engines: EngineSet<F>,
    sync_state: SyncState,
}

impl<F: EngineFactory> BotContext<F> {
    pub fn new(config: ResolvedConfig, engines: EngineSet<F>) -> Self {
        Self {
            config,
            engines,
            sync_state: SyncState::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    #[must_use]
    pub fn engines(&self) -> &EngineSet<F> {
        &self.engines
    }

    /// Database credentials plus mutable access to the trade-logic engine.
    ///
    /// The configuration stays read-only while the engine is synced.
    pub fn sync_parts(&mut self) -> (&DatabaseConfig, &mut F::Tle) {
        (&self.config.database, &mut self.engines.tle)
    }

    #[must_use]
    pub fn sync_state(&self) -> SyncState {
        self.sync_state
    }

    pub(crate) fn set_sync_state(&mut self, state: SyncState) {
        self.sync_state = state;
    }
}
