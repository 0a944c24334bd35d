//! Connector producing OpenSearch client handles.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ConnectionConfig;
use crate::errors::SearchError;
use crate::interfaces::{ClientConnector, SearchClient};
use crate::opensearch::OpenSearchClient;

/// Connects [`OpenSearchClient`] handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSearchConnector;

#[async_trait]
impl ClientConnector for OpenSearchConnector {
    async fn connect(&self, config: &ConnectionConfig) -> Result<Arc<dyn SearchClient>, SearchError> {
        let client = OpenSearchClient::connect(config.clone()).await?;
        Ok(Arc::new(client))
    }
}
