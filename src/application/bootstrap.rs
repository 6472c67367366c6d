//! Configuration bootstrap phase.
//!
//! The primary configuration must already exist. The secondary (database)
//! configuration is generated interactively and persisted when absent.

use tracing::{info, warn};

use crate::application::context::ResolvedConfig;
use crate::domain::configuration::ConfigLookup;
use crate::domain::database::DatabaseConfig;
use crate::error::StartupError;
use crate::infrastructure::config::paths::ConfigLocations;
use crate::infrastructure::config::settings::Settings;
use crate::port::outbound::config_store::ConfigStore;
use crate::port::outbound::notifier::{StartupEvent, StartupNotifier};
use crate::port::outbound::prompt::SecondaryConfigProvider;

/// Resolves the primary and secondary configurations.
pub struct ConfigBootstrapper<'a> {
    store: &'a dyn ConfigStore,
    provider: &'a dyn SecondaryConfigProvider,
    notifier: &'a dyn StartupNotifier,
    locations: &'a ConfigLocations,
}

impl<'a> ConfigBootstrapper<'a> {
    pub fn new(
        store: &'a dyn ConfigStore,
        provider: &'a dyn SecondaryConfigProvider,
        notifier: &'a dyn StartupNotifier,
        locations: &'a ConfigLocations,
    ) -> Self {
        Self {
            store,
            provider,
            notifier,
            locations,
        }
    }

    /// Resolve both configurations.
    ///
    /// # Errors
    /// A missing or unreadable primary configuration is fatal, as is any
    /// secondary failure other than absence.
    pub fn resolve(&self) -> Result<ResolvedConfig, StartupError> {
        self.resolve_with(|_| {})
    }

    /// Resolve both configurations, calling `on_primary` with the settings
    /// as soon as the primary configuration is loaded and before the
    /// secondary one is read or generated.
    ///
    /// # Errors
    /// Same as [`Self::resolve`].
    pub fn resolve_with(
        &self,
        on_primary: impl FnOnce(&Settings),
    ) -> Result<ResolvedConfig, StartupError> {
        let primary = self
            .store
            .read(&self.locations.primary)
            .map_err(StartupError::PrimaryConfig)?;
        let settings =
            Settings::from_configuration(&primary).map_err(StartupError::PrimaryConfig)?;
        on_primary(&settings);
        info!(
            path = %self.locations.primary.display(),
            keys = primary.len(),
            "Primary configuration loaded"
        );

        let (database, database_generated) = self.resolve_database()?;

        Ok(ResolvedConfig {
            primary,
            settings,
            database,
            database_generated,
        })
    }

    fn resolve_database(&self) -> Result<(DatabaseConfig, bool), StartupError> {
        let location = &self.locations.secondary;
        match self.store.lookup(location).map_err(StartupError::secondary)? {
            ConfigLookup::Found(config) => {
                let database =
                    DatabaseConfig::from_configuration(&config).map_err(StartupError::secondary)?;
                info!(
                    path = %location.display(),
                    host = %database.host,
                    "Database configuration loaded"
                );
                Ok((database, false))
            }
            ConfigLookup::NotFound(path) => {
                warn!(path = %path.display(), "Database configuration not found, generating");
                self.notifier
                    .notify(StartupEvent::SecondaryConfigMissing { path: path.clone() });

                let database = self
                    .provider
                    .supply_database_config()
                    .map_err(StartupError::secondary)?;
                self.store
                    .write(&path, &database.to_configuration())
                    .map_err(StartupError::secondary)?;

                info!(
                    path = %path.display(),
                    host = %database.host,
                    "Database configuration saved"
                );
                self.notifier
                    .notify(StartupEvent::SecondaryConfigSaved { path });
                Ok((database, true))
            }
        }
    }
}
