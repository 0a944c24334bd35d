//! Interface definitions for search clients and their collaborators.
//!
//! `SearchClient` is the handle contract, `ClientConnector` builds handles
//! and `ConfigSource` resolves named configurations. All three are seams
//! for dependency injection and test doubles.

mod client_connector;
mod config_source;
mod search_client;

pub use client_connector::ClientConnector;
pub use config_source::ConfigSource;
pub use search_client::{DeleteOutcome, RefreshPolicy, SearchClient};
