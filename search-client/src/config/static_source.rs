//! In-memory connection configurations.

use std::collections::HashMap;

use search_client_repository::{ConfigSource, ConnectionConfig, SearchError};

/// Configuration source backed by a fixed map.
///
/// Useful when configurations come from a file or are built in code.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    configs: HashMap<String, ConnectionConfig>,
}

impl StaticConfigSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration under `name`, replacing any previous one.
    pub fn with(mut self, name: impl Into<String>, config: ConnectionConfig) -> Self {
        self.configs.insert(name.into(), config);
        self
    }

    /// Parse a JSON object mapping names to configuration records.
    ///
    /// ```ignore
    /// let source = StaticConfigSource::from_json(r#"{
    ///     "elastic_test": {"url": "http://127.0.0.1:9200", "timeout_ms": 3000}
    /// }"#)?;
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let configs: HashMap<String, ConnectionConfig> = serde_json::from_str(json)
            .map_err(|e| SearchError::config(format!("Invalid configuration JSON: {}", e)))?;
        Ok(Self { configs })
    }

    /// Configured names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.configs.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self, name: &str) -> Result<ConnectionConfig, SearchError> {
        self.configs
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::config(format!("no configuration named {}", name)))
    }
}
