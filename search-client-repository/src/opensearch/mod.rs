//! OpenSearch implementation of the search client.
//!
//! This module provides a concrete implementation of `SearchClient`
//! using OpenSearch as the backend.

mod client;
mod connector;
mod index_config;
mod queries;
mod responses;

pub use client::OpenSearchClient;
pub use connector::OpenSearchConnector;
pub use index_config::example_mapping;
pub use queries::build_term_query;
