//! Connection configurations read from environment variables.

use std::env;

use search_client_repository::config::DEFAULT_TIMEOUT_MS;
use search_client_repository::{ConfigSource, ConnectionConfig, SearchError};

/// Default variable prefix.
const DEFAULT_PREFIX: &str = "SEARCH";

/// Resolves named configurations from environment variables.
///
/// # Environment Variables
///
/// For a configuration named `name` (upper-cased, `-` and `.` become `_`):
///
/// - `SEARCH_<NAME>_URL`: endpoint address (required)
/// - `SEARCH_<NAME>_USERNAME`: basic-auth user (default: empty, no auth)
/// - `SEARCH_<NAME>_PASSWORD`: basic-auth password (default: empty)
/// - `SEARCH_<NAME>_TIMEOUT_MS`: request timeout in milliseconds (default: 3000)
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    prefix: String,
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl EnvConfigSource {
    /// Load a `.env` file if present, then read from the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::default()
    }

    /// Read variables under a custom prefix instead of `SEARCH`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Name of the variable holding `field` for configuration `name`.
    fn key(&self, name: &str, field: &str) -> String {
        let name: String = name
            .chars()
            .map(|c| match c {
                '-' | '.' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        format!("{}_{}_{}", self.prefix, name, field)
    }
}

impl ConfigSource for EnvConfigSource {
    fn load(&self, name: &str) -> Result<ConnectionConfig, SearchError> {
        let url_key = self.key(name, "URL");
        let url = env::var(&url_key)
            .map_err(|_| SearchError::config(format!("{} is not set", url_key)))?;

        let username = env::var(self.key(name, "USERNAME")).unwrap_or_default();
        let password = env::var(self.key(name, "PASSWORD")).unwrap_or_default();

        let timeout_key = self.key(name, "TIMEOUT_MS");
        let timeout_ms = match env::var(&timeout_key) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                SearchError::config(format!("{} is not a number ({}): {}", timeout_key, raw, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(ConnectionConfig::new(url)
            .with_credentials(username, password)
            .with_timeout_ms(timeout_ms))
    }
}
