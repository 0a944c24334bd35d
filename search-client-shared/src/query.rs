//! Term query parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Offset of the first hit returned when no page is given.
pub const DEFAULT_FROM: u32 = 0;

/// Number of hits returned when no page is given.
pub const DEFAULT_SIZE: u32 = 10;

/// Exact-match filter on a single field, with pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermQuery {
    /// Field to match on. Should be a `keyword` (or numeric) field.
    pub field: String,
    /// Value the field must equal.
    pub value: Value,
    /// Offset of the first hit.
    pub from: u32,
    /// Maximum number of hits.
    pub size: u32,
}

impl TermQuery {
    /// Create a term query returning the first page of ten hits.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            from: DEFAULT_FROM,
            size: DEFAULT_SIZE,
        }
    }

    /// Set the page to return.
    pub fn with_page(mut self, from: u32, size: u32) -> Self {
        self.from = from;
        self.size = size;
        self
    }
}
