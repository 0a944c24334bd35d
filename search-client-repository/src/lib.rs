//! # Search Client Repository
//!
//! This crate provides the client handle contract for a search engine, an
//! OpenSearch implementation of it, and the registry that maps configuration
//! names to live handles.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod registry;

pub use config::ConnectionConfig;
pub use errors::SearchError;
pub use interfaces::{ClientConnector, ConfigSource, DeleteOutcome, RefreshPolicy, SearchClient};
pub use opensearch::{OpenSearchClient, OpenSearchConnector};
pub use registry::{ClientRegistry, InitReport};
