//! Database connection credentials.

use std::fmt;

use crate::domain::configuration::Configuration;
use crate::error::{ConfigError, MetadataError};

pub const HOST_KEY: &str = "host";
pub const USER_KEY: &str = "user";
pub const PASSWORD_KEY: &str = "password";

/// Connection data held by the secondary configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Extract credentials from a configuration blob.
    ///
    /// Absent keys read as empty: a present configuration is accepted
    /// whatever keys it holds. Use [`Self::ensure_addressable`] before
    /// touching storage.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when a key is not a string.
    pub fn from_configuration(config: &Configuration) -> Result<Self, ConfigError> {
        let field = |key: &str| -> Result<String, ConfigError> {
            Ok(config.get_str(key)?.unwrap_or_default().trim().to_string())
        };
        let password = config.get_str(PASSWORD_KEY)?.unwrap_or_default();
        Ok(Self::new(field(HOST_KEY)?, field(USER_KEY)?, password))
    }

    /// Check that host and user are set, so [`Self::owner`] names a record.
    ///
    /// # Errors
    /// Returns [`MetadataError::MissingCredential`] naming the first blank field.
    pub fn ensure_addressable(&self) -> Result<(), MetadataError> {
        for (field, value) in [(HOST_KEY, &self.host), (USER_KEY, &self.user)] {
            if value.trim().is_empty() {
                return Err(MetadataError::MissingCredential {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Render as a configuration blob for persistence.
    #[must_use]
    pub fn to_configuration(&self) -> Configuration {
        [
            (HOST_KEY, self.host.as_str()),
            (USER_KEY, self.user.as_str()),
            (PASSWORD_KEY, self.password.as_str()),
        ]
        .into_iter()
        .collect()
    }

    /// Identity of the metadata record these credentials address.
    #[must_use]
    pub fn owner(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::ConfigValue;

    #[test]
    fn round_trips_through_configuration() {
        let db = DatabaseConfig::new("db.local", "bot", "secret");
        let config = db.to_configuration();
        assert_eq!(config.len(), 3);
        assert_eq!(DatabaseConfig::from_configuration(&config).unwrap(), db);
        assert!(db.ensure_addressable().is_ok());
    }

    #[test]
    fn absent_keys_read_as_empty() {
        let db = DatabaseConfig::from_configuration(&Configuration::new()).unwrap();
        assert_eq!(db, DatabaseConfig::new("", "", ""));
        assert_eq!(
            db.ensure_addressable(),
            Err(MetadataError::MissingCredential {
                field: "host".into()
            })
        );
    }

    #[test]
    fn blank_user_is_not_addressable() {
        let config: Configuration = [("host", "db.local"), ("user", "  ")].into_iter().collect();
        let db = DatabaseConfig::from_configuration(&config).unwrap();
        assert_eq!(
            db.ensure_addressable(),
            Err(MetadataError::MissingCredential {
                field: "user".into()
            })
        );
    }

    #[test]
    fn non_string_host_is_invalid() {
        let config: Configuration = [
            ("host", ConfigValue::from(3306_i64)),
            ("user", ConfigValue::from("bot")),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            DatabaseConfig::from_configuration(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_password_is_allowed() {
        let config: Configuration = [("host", "h"), ("user", "u"), ("password", "")]
            .into_iter()
            .collect();
        assert!(DatabaseConfig::from_configuration(&config).is_ok());
    }

    #[test]
    fn debug_output_redacts_password() {
        let db = DatabaseConfig::new("db.local", "bot", "secret");
        let rendered = format!("{db:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn owner_combines_user_and_host() {
        let db = DatabaseConfig::new("db.local", "bot", "secret");
        assert_eq!(db.owner(), "bot@db.local");
    }
}
