//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    DeleteParts, GetParts, IndexParts, OpenSearch, SearchParts,
};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::SearchError;
use crate::interfaces::{DeleteOutcome, RefreshPolicy, SearchClient};
use crate::opensearch::queries::build_term_query;
use crate::opensearch::responses;
use search_client_shared::{DocumentPayload, SearchResponse, TermQuery};

/// Client handle backed by OpenSearch (or a wire-compatible Elasticsearch).
///
/// Holds one persistent, pooled connection that is safe to share across tasks.
/// The handle only exists once a liveness ping has succeeded.
///
/// # Example
///
/// ```ignore
/// use search_client_repository::{ConnectionConfig, OpenSearchClient, SearchClient};
/// use search_client_shared::DocumentPayload;
/// use serde_json::json;
///
/// let client = OpenSearchClient::connect(ConnectionConfig::new("http://localhost:9200")).await?;
/// client
///     .create_index("idx1", &json!({"mappings": {"properties": {"userid": {"type": "keyword"}}}}))
///     .await?;
/// let id = client
///     .insert_document("idx1", "1", &DocumentPayload::from(json!({"userid": "user01"})))
///     .await?;
/// ```
pub struct OpenSearchClient {
    connection: RwLock<Option<OpenSearch>>,
    config: ConnectionConfig,
}

impl OpenSearchClient {
    /// Connect to the configured endpoint and verify it answers.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint address, optional basic-auth credentials and timeout
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A live client
    /// * `Err(SearchError::ConfigError)` - The url is empty or malformed
    /// * `Err(SearchError::ConnectionError)` - The transport could not be built or the ping failed
    pub async fn connect(config: ConnectionConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let parsed_url = Url::parse(&config.url)
            .map_err(|e| SearchError::config(format!("Invalid url {}: {}", config.url, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if config.has_credentials() {
            builder = builder.auth(Credentials::Basic(
                config.username.clone(),
                config.password.clone(),
            ));
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);
        Self::probe(&client, &config).await?;

        info!(
            url = %config.url,
            authenticated = config.has_credentials(),
            timeout_ms = config.timeout_ms,
            "Created OpenSearch client"
        );

        Ok(Self {
            connection: RwLock::new(Some(client)),
            config,
        })
    }

    /// Ping the endpoint once, bounded by the configured timeout.
    async fn probe(client: &OpenSearch, config: &ConnectionConfig) -> Result<(), SearchError> {
        let ping = client.ping().send();
        let response = match config.timeout() {
            Some(timeout) => tokio::time::timeout(timeout, ping).await.map_err(|_| {
                SearchError::connection(format!(
                    "Ping to {} timed out after {}ms",
                    config.url, config.timeout_ms
                ))
            })?,
            None => ping.await,
        }
        .map_err(|e| SearchError::connection(format!("Ping to {} failed: {}", config.url, e)))?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(SearchError::connection(format!(
                "Ping to {} returned status {}",
                config.url, status
            )));
        }
        Ok(())
    }

    /// Create an index from a JSON mapping given as text.
    pub async fn create_index_from_str(&self, index: &str, mapping: &str) -> Result<(), SearchError> {
        let mapping: Value = serde_json::from_str(mapping)
            .map_err(|e| SearchError::serialization(format!("Invalid mapping: {}", e)))?;
        self.create_index(index, &mapping).await
    }

    /// Build a backend error from a failed response, logging the body.
    async fn failure(operation: &str, response: Response) -> SearchError {
        let status = response.status_code();
        let error_body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %error_body, "{} request failed", operation);
        SearchError::backend(format!(
            "{} failed with status {}: {}",
            operation, status, error_body
        ))
    }
}

fn require_name(kind: &str, value: &str) -> Result<(), SearchError> {
    if value.is_empty() {
        return Err(SearchError::config(format!("{} is required", kind)));
    }
    Ok(())
}

#[async_trait]
impl SearchClient for OpenSearchClient {
    fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn close(&self) {
        if self.connection.write().take().is_some() {
            info!(url = %self.config.url, "Closed OpenSearch client");
        }
    }

    fn is_closed(&self) -> bool {
        self.connection.read().is_none()
    }

    fn connection(&self) -> Result<OpenSearch, SearchError> {
        self.connection
            .read()
            .clone()
            .ok_or_else(|| SearchError::closed(&self.config.url))
    }

    async fn ping(&self) -> Result<bool, SearchError> {
        let response = self.connection()?.ping().send().await?;
        Ok(response.status_code().is_success())
    }

    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        require_name("index", index)?;

        let response = self
            .connection()?
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => Err(Self::failure("Index exists", response).await),
        }
    }

    #[instrument(skip(self, mapping))]
    async fn create_index(&self, index: &str, mapping: &Value) -> Result<(), SearchError> {
        if self.index_exists(index).await? {
            return Err(SearchError::already_exists(index));
        }

        let response = self
            .connection()?
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(mapping.clone())
            .send()
            .await?;

        if !response.status_code().is_success() {
            return Err(Self::failure("Create index", response).await);
        }

        info!(index = %index, "Index created");
        Ok(())
    }

    #[instrument(skip(self, payload))]
    async fn insert_document_with_refresh(
        &self,
        index: &str,
        id: &str,
        payload: &DocumentPayload,
        refresh: RefreshPolicy,
    ) -> Result<String, SearchError> {
        require_name("index", index)?;
        require_name("id", id)?;

        let body = payload
            .to_value()
            .map_err(|e| SearchError::serialization(e.to_string()))?;

        let connection = self.connection()?;
        let mut request = connection.index(IndexParts::IndexId(index, id)).body(body);
        if refresh == RefreshPolicy::WaitFor {
            request = request.refresh(Refresh::WaitFor);
        }
        let response = request.send().await?;

        if !response.status_code().is_success() {
            return Err(Self::failure("Index document", response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let stored_id = responses::parse_index_response(&body)?;

        debug!(index = %index, id = %stored_id, "Document indexed");
        Ok(stored_id)
    }

    #[instrument(skip(self))]
    async fn get_document(&self, index: &str, id: &str) -> Result<Vec<u8>, SearchError> {
        require_name("index", index)?;
        require_name("id", id)?;

        let response = self
            .connection()?
            .get(GetParts::IndexId(index, id))
            .send()
            .await?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            return Err(SearchError::not_found(index, id));
        }
        if !status.is_success() {
            return Err(Self::failure("Get document", response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let source = responses::parse_get_response(&body)?
            .ok_or_else(|| SearchError::not_found(index, id))?;

        debug!(index = %index, id = %id, bytes = source.len(), "Document fetched");
        Ok(source)
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, index: &str, id: &str) -> Result<DeleteOutcome, SearchError> {
        require_name("index", index)?;
        require_name("id", id)?;

        let response = self
            .connection()?
            .delete(DeleteParts::IndexId(index, id))
            .refresh(Refresh::WaitFor)
            .send()
            .await?;

        let status = response.status_code();
        let body_text = response.text().await.map_err(SearchError::from)?;
        let body: Value = serde_json::from_str(&body_text).unwrap_or(Value::Null);

        let outcome = responses::parse_delete_response(status.as_u16(), &body).inspect_err(|_| {
            error!(status = %status, body = %body_text, "Delete request failed");
        })?;

        debug!(index = %index, id = %id, outcome = ?outcome, "Delete completed");
        Ok(outcome)
    }

    #[instrument(skip(self, query), fields(field = %query.field))]
    async fn term_search(
        &self,
        index: &str,
        query: &TermQuery,
    ) -> Result<SearchResponse, SearchError> {
        require_name("index", index)?;

        let response = self
            .connection()?
            .search(SearchParts::Index(&[index]))
            .from(i64::from(query.from))
            .size(i64::from(query.size))
            .pretty(true)
            .body(build_term_query(query))
            .send()
            .await?;

        if !response.status_code().is_success() {
            return Err(Self::failure("Search", response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let result = responses::parse_search_response(&body)?;

        debug!(index = %index, total = result.total, returned = result.hits.len(), "Search completed");
        Ok(result)
    }
}
