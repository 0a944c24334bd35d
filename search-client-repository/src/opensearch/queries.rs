//! OpenSearch query builders.

use serde_json::{json, Map, Value};

use search_client_shared::TermQuery;

/// Build the request body for a term query.
///
/// Pagination is passed as URL parameters, so only the query itself goes in
/// the body.
pub fn build_term_query(query: &TermQuery) -> Value {
    let mut term = Map::new();
    term.insert(query.field.clone(), query.value.clone());

    json!({
        "query": {
            "term": term
        }
    })
}
