//! # Search Client
//!
//! Bootstrap for the named search client registry.
//!
//! This crate resolves connection configurations from the environment, sets
//! up logging, and initializes a [`ClientRegistry`] that the rest of the
//! application receives as a dependency.

pub mod config;
pub mod telemetry;

pub use config::{Dependencies, EnvConfigSource, StaticConfigSource};
pub use search_client_repository::{
    ClientRegistry, ConnectionConfig, DeleteOutcome, SearchClient, SearchError,
};
pub use search_client_shared::{DocumentPayload, SearchResponse, TermQuery};

use thiserror::Error;

/// Errors that can occur while bootstrapping the search clients.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),

    /// Logging could not be set up.
    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a telemetry error.
    pub fn telemetry(msg: impl Into<String>) -> Self {
        Self::TelemetryError(msg.into())
    }
}
