//! Search client trait definition.
//!
//! This module defines the abstract interface of a live client handle,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;
use opensearch::OpenSearch;
use serde_json::Value;

use crate::config::ConnectionConfig;
use crate::errors::SearchError;
use search_client_shared::{DocumentPayload, SearchResponse, TermQuery};

/// Visibility requested from the backend for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Return as soon as the write is accepted.
    #[default]
    None,
    /// Wait until the write is visible to searches.
    WaitFor,
}

/// Outcome of a delete request that reached the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The document existed and was removed.
    Deleted,
    /// There was no document with that id.
    NotFound,
}

impl DeleteOutcome {
    /// Whether the document was actually removed.
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// A live connection to a search engine plus its operations.
///
/// Handles are created already verified (a liveness ping succeeded) and are
/// shared across tasks without extra locking, so implementations must be
/// `Send + Sync`. After [`SearchClient::close`] every operation fails with
/// [`SearchError::ClientClosed`].
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// The configuration the handle was built from.
    fn config(&self) -> &ConnectionConfig;

    /// Release the underlying connection. Calling it again is a no-op.
    fn close(&self);

    /// Whether [`SearchClient::close`] has been called.
    fn is_closed(&self) -> bool;

    /// The underlying OpenSearch client, for requests this trait does not cover.
    ///
    /// Searches beyond a single term query are expected to be written against
    /// this directly. Backends without an OpenSearch transport return a
    /// [`SearchError::BackendError`].
    fn connection(&self) -> Result<OpenSearch, SearchError> {
        Err(SearchError::backend(format!(
            "{} does not expose an OpenSearch connection",
            self.config().url
        )))
    }

    /// Check that the search engine answers.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine answered with a success status
    /// * `Ok(false)` - The engine answered with an error status
    /// * `Err(SearchError)` - The request could not be executed
    async fn ping(&self) -> Result<bool, SearchError>;

    /// Check whether an index exists.
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Create an index with the given settings and mappings.
    ///
    /// The existence probe and the creation are two requests, so two callers
    /// creating the same index concurrently can both pass the probe.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The index was created
    /// * `Err(SearchError::AlreadyExists)` - The index was already present
    /// * `Err(SearchError)` - The backend rejected the request
    async fn create_index(&self, index: &str, mapping: &Value) -> Result<(), SearchError>;

    /// Write a document under an explicit id with the given refresh policy.
    ///
    /// Returns the id the backend stored the document under.
    async fn insert_document_with_refresh(
        &self,
        index: &str,
        id: &str,
        payload: &DocumentPayload,
        refresh: RefreshPolicy,
    ) -> Result<String, SearchError>;

    /// Write a document under an explicit id without waiting for visibility.
    async fn insert_document(
        &self,
        index: &str,
        id: &str,
        payload: &DocumentPayload,
    ) -> Result<String, SearchError> {
        self.insert_document_with_refresh(index, id, payload, RefreshPolicy::None)
            .await
    }

    /// Read the raw serialized source of a document.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The stored `_source` as JSON bytes
    /// * `Err(SearchError::NotFound)` - No document with that id
    /// * `Err(SearchError)` - The backend rejected the request
    async fn get_document(&self, index: &str, id: &str) -> Result<Vec<u8>, SearchError>;

    /// Delete a document, waiting until the deletion is visible.
    ///
    /// # Returns
    ///
    /// * `Ok(DeleteOutcome::Deleted)` - The document was removed
    /// * `Ok(DeleteOutcome::NotFound)` - No document with that id
    /// * `Err(SearchError::DeleteError)` - The backend answered with any other result
    /// * `Err(SearchError)` - The request could not be executed
    async fn delete_document(&self, index: &str, id: &str) -> Result<DeleteOutcome, SearchError>;

    /// Run a term query against an index.
    async fn term_search(&self, index: &str, query: &TermQuery)
        -> Result<SearchResponse, SearchError>;
}
