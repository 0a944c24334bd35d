//! Search error types.
//!
//! This module defines the errors returned by client handles and the registry.

use thiserror::Error;

/// Errors that can occur while configuring, connecting to, or calling the search engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failed to establish or verify connectivity to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The index to create already exists.
    #[error("Index already exists: {0}")]
    AlreadyExists(String),

    /// The requested document does not exist.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The backend rejected the request or the transport failed.
    #[error("Backend error: {0}")]
    BackendError(String),

    /// The delete request went through but the document was not deleted.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// No client is registered under the given configuration name.
    #[error("Client not registered: {0}")]
    NotRegistered(String),

    /// The client handle was closed.
    #[error("Client closed: {0}")]
    ClientClosed(String),

    /// Failed to serialize data for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an already-exists error for an index.
    pub fn already_exists(index: &str) -> Self {
        Self::AlreadyExists(index.to_string())
    }

    /// Create a not-found error for a document.
    pub fn not_found(index: &str, id: &str) -> Self {
        Self::NotFound(format!("index={}, id={}", index, id))
    }

    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a not-registered error for a configuration name.
    pub fn not_registered(name: &str) -> Self {
        Self::NotRegistered(name.to_string())
    }

    /// Create a client-closed error.
    pub fn closed(url: &str) -> Self {
        Self::ClientClosed(url.to_string())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

impl From<opensearch::Error> for SearchError {
    fn from(err: opensearch::Error) -> Self {
        Self::BackendError(err.to_string())
    }
}
