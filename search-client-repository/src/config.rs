//! Connection configuration for a single named search client.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Request timeout used when a configuration does not set one.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Configuration record for one search engine connection.
///
/// An empty `username` disables basic authentication. A `timeout_ms` of zero
/// leaves the transport on its own default.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Endpoint address, e.g. `http://127.0.0.1:9200`.
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ConnectionConfig {
    /// Create an unauthenticated configuration with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: String::new(),
            password: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set basic-auth credentials.
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Whether basic-auth credentials are configured.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// Check the record before a connection is attempted.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.url.trim().is_empty() {
            return Err(SearchError::config("url is empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
