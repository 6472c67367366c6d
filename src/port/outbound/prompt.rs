//! Interactive credential provider port.

use crate::domain::database::DatabaseConfig;
use crate::error::Result;

/// Supplies database credentials when no secondary configuration exists.
pub trait SecondaryConfigProvider {
    /// Collect host, user and password for a new secondary configuration.
    fn supply_database_config(&self) -> Result<DatabaseConfig>;
}
