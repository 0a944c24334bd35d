//! Named configuration lookup.

use crate::config::ConnectionConfig;
use crate::errors::SearchError;

/// Resolves a connection configuration by name.
///
/// The registry calls this once per name at initialization time.
pub trait ConfigSource: Send + Sync {
    /// Load the configuration registered under `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionConfig)` - The configuration for that name
    /// * `Err(SearchError::ConfigError)` - The name is unknown or its values are invalid
    fn load(&self, name: &str) -> Result<ConnectionConfig, SearchError>;
}
