//! Client handle construction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ConnectionConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchClient;

/// Builds verified client handles from configuration records.
///
/// The registry owns one connector and uses it for every name it initializes.
#[async_trait]
pub trait ClientConnector: Send + Sync {
    /// Build a handle and verify that the engine is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<dyn SearchClient>)` - A live handle
    /// * `Err(SearchError::ConfigError)` - The configuration is invalid
    /// * `Err(SearchError::ConnectionError)` - The engine could not be reached
    async fn connect(&self, config: &ConnectionConfig) -> Result<Arc<dyn SearchClient>, SearchError>;
}
