//! Production wiring for the startup sequence.

use crate::adapter::outbound::file::FileConfigStore;
use crate::application::orchestrator::{ExitStatus, Orchestrator};
use crate::infrastructure::bootstrap::build_engine_factory;
use crate::infrastructure::config::paths::ConfigLocations;

use super::{ConsoleNotifier, ConsolePrompt};

/// Run the bot against the configuration directory named by the environment.
pub fn execute() -> ExitStatus {
    let store = FileConfigStore::new();
    let prompt = ConsolePrompt::new();
    let notifier = ConsoleNotifier::new();

    Orchestrator::new(&store, &prompt, &notifier, ConfigLocations::from_env())
        .run(build_engine_factory)
}
