//! Dependency initialization and wiring for the search clients.

use std::env;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::EnvConfigSource;
use crate::ClientError;
use search_client_repository::{ClientRegistry, ConfigSource};

/// Default list of configuration names to initialize.
const DEFAULT_CLIENT_NAMES: &str = "default";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The registry of named search clients, shared with consumers.
    pub registry: Arc<ClientRegistry>,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_CLIENT_NAMES`: comma-separated configuration names (default: default)
    /// - `SEARCH_<NAME>_*`: per-name connection settings, see [`EnvConfigSource`]
    ///
    /// Names whose client cannot be initialized are logged and skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ClientError)` - If no configuration name is given
    pub async fn new() -> Result<Self, ClientError> {
        let source = EnvConfigSource::from_env();
        let names = env::var("SEARCH_CLIENT_NAMES")
            .unwrap_or_else(|_| DEFAULT_CLIENT_NAMES.to_string());
        let names = parse_names(&names);

        let registry = ClientRegistry::with_opensearch();
        Self::with_registry(registry, &source, &names).await
    }

    /// Initialize the given registry from an explicit configuration source.
    pub async fn with_registry(
        registry: ClientRegistry,
        source: &dyn ConfigSource,
        names: &[String],
    ) -> Result<Self, ClientError> {
        if names.is_empty() {
            return Err(ClientError::config("no search client names configured"));
        }

        info!(names = ?names, "Initializing search clients");

        let report = registry.initialize_all(source, names).await;
        if !report.is_complete() {
            warn!(
                initialized = report.initialized.len(),
                failed = report.failed.len(),
                "Some search clients failed to initialize"
            );
        }

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Close every client when the process receives Ctrl-C.
    pub async fn close_on_shutdown(&self) -> Result<(), ClientError> {
        self.close_when(tokio::signal::ctrl_c()).await
    }

    /// Close every client once `signal` resolves.
    pub async fn close_when<F>(&self, signal: F) -> Result<(), ClientError>
    where
        F: Future<Output = io::Result<()>>,
    {
        signal
            .await
            .map_err(|e| ClientError::config(format!("Failed to listen for shutdown: {}", e)))?;
        info!("Shutdown signal received");
        self.shutdown();
        Ok(())
    }

    /// Close every registered client.
    pub fn shutdown(&self) {
        self.registry.close_all();
    }
}

/// Split a comma-separated name list, dropping blanks.
fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
