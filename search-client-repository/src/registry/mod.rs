//! Registry of named search client handles.
//!
//! Application code initializes the registry once at startup with the
//! configuration names it needs, then looks handles up by name.

use std::collections::HashMap;
use std::sync::Arc;

use opensearch::OpenSearch;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::errors::SearchError;
use crate::interfaces::{ClientConnector, ConfigSource, DeleteOutcome, SearchClient};
use crate::opensearch::OpenSearchConnector;
use search_client_shared::{DocumentPayload, SearchResponse, TermQuery};

/// Outcome of [`ClientRegistry::initialize_all`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitReport {
    /// Names that now have a live handle.
    pub initialized: Vec<String>,
    /// Names that were skipped, with the reason.
    pub failed: Vec<(String, SearchError)>,
}

impl InitReport {
    /// Whether every requested name was initialized.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Process-wide mapping from configuration name to client handle.
///
/// Create one per process, share it behind an `Arc`, and call
/// [`ClientRegistry::close_all`] on shutdown. Lookups take the read lock;
/// installing and closing take the write lock. The lock is never held while a
/// connection is being established.
pub struct ClientRegistry {
    connector: Arc<dyn ClientConnector>,
    clients: RwLock<HashMap<String, Arc<dyn SearchClient>>>,
}

impl ClientRegistry {
    /// Create an empty registry that builds handles with the given connector.
    pub fn new(connector: Arc<dyn ClientConnector>) -> Self {
        Self {
            connector,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty registry that connects to OpenSearch.
    pub fn with_opensearch() -> Self {
        Self::new(Arc::new(OpenSearchConnector))
    }

    /// Initialize a handle for each configuration name.
    ///
    /// For every name the configuration is loaded from `source`, a handle is
    /// connected and then installed, replacing (and closing) any previous
    /// handle under that name. A name whose configuration or connection fails
    /// is logged and skipped; the others still get initialized.
    ///
    /// Callers that only need fire-and-forget startup can ignore the report.
    #[instrument(skip(self, source, names))]
    pub async fn initialize_all<I, S>(&self, source: &dyn ConfigSource, names: I) -> InitReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let mut report = InitReport::default();

        for name in names {
            match self.initialize_one(source, &name).await {
                Ok(()) => {
                    info!(config_name = %name, "Search client initialized");
                    report.initialized.push(name);
                }
                Err(e) => {
                    error!(config_name = %name, error = %e, "Search client initialization failed");
                    report.failed.push((name, e));
                }
            }
        }

        report
    }

    async fn initialize_one(&self, source: &dyn ConfigSource, name: &str) -> Result<(), SearchError> {
        let config = source.load(name)?;
        let client = self.connector.connect(&config).await?;
        self.install(name, client);
        Ok(())
    }

    /// Install a handle under `name`.
    ///
    /// A previous handle under the same name is closed before the new one
    /// becomes visible to lookups.
    pub fn install(&self, name: &str, client: Arc<dyn SearchClient>) {
        let mut clients = self.clients.write();
        if let Some(old) = clients.remove(name) {
            old.close();
            debug!(config_name = %name, "Closed replaced search client");
        }
        clients.insert(name.to_string(), client);
    }

    /// Look up the handle registered under `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<dyn SearchClient>)` - The shared handle
    /// * `Err(SearchError::NotRegistered)` - Nothing is registered under that name
    pub fn get_client(&self, name: &str) -> Result<Arc<dyn SearchClient>, SearchError> {
        self.clients
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::not_registered(name))
    }

    /// The raw OpenSearch connection of the handle registered under `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearch)` - A clone of the handle's pooled client
    /// * `Err(SearchError::NotRegistered)` - Nothing is registered under that name
    /// * `Err(SearchError::ClientClosed)` - The handle was closed while still registered
    pub fn connection(&self, name: &str) -> Result<OpenSearch, SearchError> {
        self.get_client(name)?.connection()
    }

    /// Close every handle and empty the registry.
    ///
    /// Handles still held elsewhere reject further work with
    /// [`SearchError::ClientClosed`].
    pub fn close_all(&self) {
        let drained: Vec<(String, Arc<dyn SearchClient>)> = self.clients.write().drain().collect();
        for (name, client) in &drained {
            client.close();
            debug!(config_name = %name, "Closed search client");
        }
        info!(count = drained.len(), "Closed all search clients");
    }

    /// Registered configuration names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.clients.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    /// Whether no handle is registered.
    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    /// Create an index through the handle registered under `name`.
    pub async fn create_index(&self, name: &str, index: &str, mapping: &Value) -> Result<(), SearchError> {
        self.get_client(name)?.create_index(index, mapping).await
    }

    /// Insert a document through the handle registered under `name`.
    pub async fn insert_document(
        &self,
        name: &str,
        index: &str,
        id: &str,
        payload: &DocumentPayload,
    ) -> Result<String, SearchError> {
        self.get_client(name)?
            .insert_document(index, id, payload)
            .await
    }

    /// Read a document through the handle registered under `name`.
    pub async fn get_document(&self, name: &str, index: &str, id: &str) -> Result<Vec<u8>, SearchError> {
        self.get_client(name)?.get_document(index, id).await
    }

    /// Delete a document through the handle registered under `name`.
    pub async fn delete_document(
        &self,
        name: &str,
        index: &str,
        id: &str,
    ) -> Result<DeleteOutcome, SearchError> {
        self.get_client(name)?.delete_document(index, id).await
    }

    /// Run a term query through the handle registered under `name`.
    pub async fn term_search(
        &self,
        name: &str,
        index: &str,
        query: &TermQuery,
    ) -> Result<SearchResponse, SearchError> {
        self.get_client(name)?.term_search(index, query).await
    }
}
