//! Startup orchestrator.
//!
//! Sequences bootstrap, launch and metadata sync, and maps the outcome to a
//! process exit status. No phase is retried.

use tracing::{error, info};

use crate::application::bootstrap::ConfigBootstrapper;
use crate::application::context::BotContext;
use crate::application::launcher::EngineLauncher;
use crate::application::metadata_sync::MetadataSyncController;
use crate::error::{Result, StartupError};
use crate::infrastructure::config::paths::ConfigLocations;
use crate::infrastructure::config::settings::Settings;
use crate::port::outbound::config_store::ConfigStore;
use crate::port::outbound::engine::EngineFactory;
use crate::port::outbound::notifier::{StartupEvent, StartupNotifier};
use crate::port::outbound::prompt::SecondaryConfigProvider;

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

pub struct Orchestrator<'a> {
    store: &'a dyn ConfigStore,
    provider: &'a dyn SecondaryConfigProvider,
    notifier: &'a dyn StartupNotifier,
    locations: ConfigLocations,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        store: &'a dyn ConfigStore,
        provider: &'a dyn SecondaryConfigProvider,
        notifier: &'a dyn StartupNotifier,
        locations: ConfigLocations,
    ) -> Self {
        Self {
            store,
            provider,
            notifier,
            locations,
        }
    }

    /// Run the full startup sequence and report the exit status.
    ///
    /// `build` turns the resolved settings into an engine factory. Every
    /// fatal condition is reported through the notifier exactly once.
    pub fn run<F, B>(&self, build: B) -> ExitStatus
    where
        F: EngineFactory,
        B: FnOnce(&Settings) -> Result<F>,
    {
        match self.execute(build) {
            Ok(context) => {
                info!(sync_state = context.sync_state().label(), "Startup complete");
                self.notifier.notify(StartupEvent::Finished);
                ExitStatus::Success
            }
            Err(err) => {
                error!(component = err.component(), error = %err, "Startup failed");
                self.notifier.notify(StartupEvent::Fatal {
                    component: err.component().to_string(),
                    message: err.to_string(),
                });
                ExitStatus::Failure
            }
        }
    }

    /// Run the startup sequence and hand back the live context.
    ///
    /// # Errors
    /// Returns the first fatal condition encountered.
    pub fn execute<F, B>(&self, build: B) -> std::result::Result<BotContext<F>, StartupError>
    where
        F: EngineFactory,
        B: FnOnce(&Settings) -> Result<F>,
    {
        self.notifier.notify(StartupEvent::Started {
            version: env!("CARGO_PKG_VERSION").to_string(),
        });

        let config = ConfigBootstrapper::new(
            self.store,
            self.provider,
            self.notifier,
            &self.locations,
        )
        .resolve_with(|settings| settings.logging.init())?;

        let factory = build(&config.settings).map_err(StartupError::fault)?;
        let engines = EngineLauncher::new(&factory, self.notifier).launch(&config.settings)?;

        let mut context = BotContext::new(config, engines);
        MetadataSyncController::new(self.notifier).run(&mut context);
        Ok(context)
    }
}
