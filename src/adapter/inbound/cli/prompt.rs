//! Interactive console prompt for missing database credentials.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::domain::database::DatabaseConfig;
use crate::error::Result;
use crate::port::outbound::prompt::SecondaryConfigProvider;

/// Reads database credentials from the operator's terminal.
#[derive(Default)]
pub struct ConsolePrompt {
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecondaryConfigProvider for ConsolePrompt {
    fn supply_database_config(&self) -> Result<DatabaseConfig> {
        let host: String = Input::with_theme(&self.theme)
            .with_prompt("Hostname/IP")
            .interact_text()?;

        let user: String = Input::with_theme(&self.theme)
            .with_prompt("Username")
            .interact_text()?;

        let password = Password::with_theme(&self.theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;

        Ok(DatabaseConfig::new(host.trim(), user.trim(), password))
    }
}
