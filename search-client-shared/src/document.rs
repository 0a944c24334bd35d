//! Document payloads accepted by the insert operation.

use serde::Serialize;
use serde_json::Value;

/// Body of a document to write into an index.
///
/// Callers either hand over JSON they already serialized themselves (`Raw`)
/// or a structured value that still has to be serialized (`Structured`).
/// Raw bytes are checked to be valid JSON before they are sent.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentPayload {
    /// Pre-serialized JSON bytes.
    Raw(Vec<u8>),
    /// A JSON value that the client serializes on send.
    Structured(Value),
}

impl DocumentPayload {
    /// Wrap pre-serialized JSON.
    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Raw(bytes.into())
    }

    /// Build a structured payload from any serializable value.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Structured(serde_json::to_value(value)?))
    }

    /// Resolve the payload into a JSON value, parsing raw bytes if needed.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Raw(bytes) => serde_json::from_slice(bytes),
            Self::Structured(value) => Ok(value.clone()),
        }
    }

    /// Consuming variant of [`DocumentPayload::to_value`].
    pub fn into_value(self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Raw(bytes) => serde_json::from_slice(&bytes),
            Self::Structured(value) => Ok(value),
        }
    }

    /// Whether the payload was handed over already serialized.
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl From<Value> for DocumentPayload {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

impl From<String> for DocumentPayload {
    fn from(json: String) -> Self {
        Self::Raw(json.into_bytes())
    }
}

impl From<&str> for DocumentPayload {
    fn from(json: &str) -> Self {
        Self::Raw(json.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for DocumentPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes)
    }
}
