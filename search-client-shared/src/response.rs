//! Search response types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single hit of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document id.
    pub id: String,
    /// Index the document lives in.
    pub index: String,
    /// Relevance score, absent for pure filter queries.
    pub score: Option<f64>,
    /// The stored document body.
    pub source: Value,
}

/// Decoded result of a search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching documents, not only the returned page.
    pub total: u64,
    /// Time the backend spent executing the query.
    pub took_ms: u64,
    /// The returned page of hits, in backend order.
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// Whether no document matched and no hit was returned.
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.hits.is_empty()
    }

    /// Decode every hit source into `T`.
    pub fn sources_as<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        self.hits
            .iter()
            .map(|hit| T::deserialize(&hit.source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        userid: String,
    }

    #[test]
    fn test_sources_as() {
        let response = SearchResponse {
            total: 2,
            took_ms: 3,
            hits: vec![
                SearchHit {
                    id: "1".to_string(),
                    index: "idx1".to_string(),
                    score: Some(1.0),
                    source: json!({"userid": "user01"}),
                },
                SearchHit {
                    id: "2".to_string(),
                    index: "idx1".to_string(),
                    score: None,
                    source: json!({"userid": "user02", "extra": true}),
                },
            ],
        };

        let users: Vec<User> = response.sources_as().unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].userid, "user01");
        assert_eq!(users[1].userid, "user02");
    }

    #[test]
    fn test_is_empty_considers_hits() {
        let response = SearchResponse {
            total: 0,
            took_ms: 0,
            hits: vec![SearchHit {
                id: "1".to_string(),
                index: "idx1".to_string(),
                score: None,
                source: json!({}),
            }],
        };
        assert!(!response.is_empty());
    }

    #[test]
    fn test_empty_response() {
        let response = SearchResponse::default();
        assert!(response.is_empty());
        assert!(response.sources_as::<User>().unwrap().is_empty());
    }
}
