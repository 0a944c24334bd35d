//! Example index mapping.
//!
//! Mappings are passed through to the engine untouched; this one documents
//! the expected shape and is used by the tests.

use serde_json::{json, Value};

/// Get an example settings-and-mappings body for a user index.
///
/// - `userid`: keyword, stored separately, usable in term queries
/// - `username` / `userdesc`: analyzed text
/// - `usertel`: long
pub fn example_mapping() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "properties": {
                "userid": {
                    "type": "keyword",
                    "store": true
                },
                "username": {
                    "type": "text"
                },
                "userdesc": {
                    "type": "text"
                },
                "usertel": {
                    "type": "long"
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_mapping_structure() {
        let mapping = example_mapping();

        assert!(mapping["settings"]["number_of_shards"].is_number());
        assert_eq!(mapping["mappings"]["properties"]["userid"]["type"], "keyword");
        assert_eq!(mapping["mappings"]["properties"]["usertel"]["type"], "long");
    }
}
