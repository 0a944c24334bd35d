//! Parsing of OpenSearch response bodies.

use serde_json::Value;

use crate::errors::SearchError;
use crate::interfaces::DeleteOutcome;
use search_client_shared::{SearchHit, SearchResponse};

/// Extract the stored document id from an index response.
pub fn parse_index_response(body: &Value) -> Result<String, SearchError> {
    body.get("_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SearchError::parse("index response has no _id"))
}

/// Extract the serialized `_source` from a get response.
///
/// Returns `Ok(None)` when the backend reports `found: false`.
pub fn parse_get_response(body: &Value) -> Result<Option<Vec<u8>>, SearchError> {
    if body.get("found").and_then(Value::as_bool) == Some(false) {
        return Ok(None);
    }

    let source = body
        .get("_source")
        .ok_or_else(|| SearchError::parse("get response has no _source"))?;

    serde_json::to_vec(source)
        .map(Some)
        .map_err(|e| SearchError::serialization(e.to_string()))
}

/// Classify a delete response.
///
/// Only `"deleted"` on a success status and `"not_found"` on 404 are
/// accepted; anything else, including a missing index, is a delete error.
pub fn parse_delete_response(status: u16, body: &Value) -> Result<DeleteOutcome, SearchError> {
    let result = body.get("result").and_then(Value::as_str);

    match (status, result) {
        (200..=299, Some("deleted")) => Ok(DeleteOutcome::Deleted),
        (404, Some("not_found")) => Ok(DeleteOutcome::NotFound),
        (_, Some(other)) => Err(SearchError::delete(format!(
            "status {}, result {}",
            status, other
        ))),
        (_, None) => Err(SearchError::delete(format!(
            "status {}, body {}",
            status, body
        ))),
    }
}

/// Decode a search response body.
///
/// Accepts both the object form of `hits.total` (`{"value": n}`) and the
/// older plain number. Without a total the number of returned hits is used.
/// A hit without an `_id` makes the whole body a parse error.
pub fn parse_search_response(body: &Value) -> Result<SearchResponse, SearchError> {
    let hits = body
        .get("hits")
        .ok_or_else(|| SearchError::parse("search response has no hits"))?;

    let total = match hits.get("total") {
        Some(Value::Object(total)) => total.get("value").and_then(Value::as_u64),
        Some(total) => total.as_u64(),
        None => None,
    };

    let hits = match hits.get("hits") {
        Some(Value::Array(items)) => items.iter().map(parse_hit).collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(SearchError::parse("search response hits.hits is not an array")),
        None => Vec::new(),
    };

    Ok(SearchResponse {
        total: total.unwrap_or(hits.len() as u64),
        took_ms: body.get("took").and_then(Value::as_u64).unwrap_or(0),
        hits,
    })
}

fn parse_hit(hit: &Value) -> Result<SearchHit, SearchError> {
    let id = hit
        .get("_id")
        .and_then(Value::as_str)
        .ok_or_else(|| SearchError::parse(format!("search hit has no _id: {}", hit)))?;

    Ok(SearchHit {
        id: id.to_string(),
        index: hit
            .get("_index")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        score: hit.get("_score").and_then(Value::as_f64),
        source: hit.get("_source").cloned().unwrap_or(Value::Null),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_index_response() {
        let body = json!({"_index": "idx1", "_id": "1", "result": "created"});
        assert_eq!(parse_index_response(&body).unwrap(), "1");

        let result = parse_index_response(&json!({"result": "created"}));
        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_parse_get_response() {
        let body = json!({"_id": "1", "found": true, "_source": {"userid": "user01"}});
        let source = parse_get_response(&body).unwrap().unwrap();
        let value: Value = serde_json::from_slice(&source).unwrap();

        assert_eq!(value, json!({"userid": "user01"}));
    }

    #[test]
    fn test_parse_get_response_not_found() {
        let body = json!({"_id": "1", "found": false});
        assert!(parse_get_response(&body).unwrap().is_none());
    }

    #[test]
    fn test_parse_delete_response() {
        assert_eq!(
            parse_delete_response(200, &json!({"result": "deleted"})).unwrap(),
            DeleteOutcome::Deleted
        );
        assert_eq!(
            parse_delete_response(404, &json!({"result": "not_found"})).unwrap(),
            DeleteOutcome::NotFound
        );
    }

    #[test]
    fn test_parse_delete_response_errors() {
        let missing_index = json!({
            "error": {"type": "index_not_found_exception"},
            "status": 404
        });
        assert!(matches!(
            parse_delete_response(404, &missing_index),
            Err(SearchError::DeleteError(_))
        ));
        assert!(matches!(
            parse_delete_response(200, &json!({"result": "noop"})),
            Err(SearchError::DeleteError(_))
        ));
    }

    #[test]
    fn test_parse_search_response() {
        let body = json!({
            "took": 4,
            "hits": {
                "total": {"value": 1, "relation": "eq"},
                "max_score": 0.2876821,
                "hits": [
                    {
                        "_index": "idx1",
                        "_id": "1",
                        "_score": 0.2876821,
                        "_source": {"userid": "user01"}
                    }
                ]
            }
        });

        let response = parse_search_response(&body).unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(response.took_ms, 4);
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].id, "1");
        assert_eq!(response.hits[0].index, "idx1");
        assert_eq!(response.hits[0].source["userid"], "user01");
    }

    #[test]
    fn test_parse_search_response_legacy_total() {
        let body = json!({"took": 1, "hits": {"total": 7, "hits": []}});
        let response = parse_search_response(&body).unwrap();

        assert_eq!(response.total, 7);
        assert!(response.hits.is_empty());
    }

    #[test]
    fn test_parse_search_response_rejects_hit_without_id() {
        let body = json!({
            "took": 1,
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "hits": [
                    {"_index": "idx1", "_id": "1", "_source": {"userid": "user01"}},
                    {"_index": "idx1", "_score": 0.1}
                ]
            }
        });

        let result = parse_search_response(&body);

        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_parse_search_response_without_total() {
        let body = json!({
            "hits": {"hits": [{"_index": "idx1", "_id": "1", "_source": {}}]}
        });

        let response = parse_search_response(&body).unwrap();

        assert_eq!(response.total, 1);
        assert!(!response.is_empty());
    }

    #[test]
    fn test_parse_search_response_invalid() {
        let result = parse_search_response(&json!({"took": 1}));
        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }
}
