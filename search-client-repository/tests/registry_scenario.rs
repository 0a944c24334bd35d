//! End-to-end registry scenario against a mock OpenSearch server.

use std::collections::HashMap;

use opensearch::cluster::ClusterHealthParts;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use search_client_repository::{
    ClientRegistry, ConfigSource, ConnectionConfig, DeleteOutcome, SearchError,
};
use search_client_shared::{DocumentPayload, TermQuery};

struct MapConfigSource(HashMap<String, ConnectionConfig>);

impl ConfigSource for MapConfigSource {
    fn load(&self, name: &str) -> Result<ConnectionConfig, SearchError> {
        self.0
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::config(format!("no configuration named {}", name)))
    }
}

async fn mount_backend(server: &MockServer) {
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/idx1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/idx1/_doc/1"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"_index": "idx1", "_id": "1", "result": "created"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/idx1/_doc/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_index": "idx1",
            "_id": "1",
            "found": true,
            "_source": {"userid": "user01"}
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/idx1/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "took": 1,
            "hits": {
                "total": {"value": 1, "relation": "eq"},
                "hits": [{"_index": "idx1", "_id": "1", "_score": 1.0, "_source": {"userid": "user01"}}]
            }
        })))
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/idx1/_doc/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"_index": "idx1", "_id": "1", "result": "deleted"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_registry_scenario() {
    let server = MockServer::start().await;
    mount_backend(&server).await;

    let source = MapConfigSource(HashMap::from([
        ("test".to_string(), ConnectionConfig::new(server.uri())),
        ("broken".to_string(), ConnectionConfig::new("")),
    ]));
    let registry = ClientRegistry::with_opensearch();

    let report = registry.initialize_all(&source, ["test", "broken"]).await;
    assert_eq!(report.initialized, vec!["test"]);
    assert_eq!(report.failed.len(), 1);

    let client = registry.get_client("test").unwrap();
    assert!(client.ping().await.unwrap());

    let mapping = json!({"mappings": {"properties": {"userid": {"type": "keyword"}}}});
    registry.create_index("test", "idx1", &mapping).await.unwrap();

    let payload = DocumentPayload::from(json!({"userid": "user01"}));
    let id = registry
        .insert_document("test", "idx1", "1", &payload)
        .await
        .unwrap();
    assert_eq!(id, "1");

    let body = registry.get_document("test", "idx1", "1").await.unwrap();
    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["userid"], "user01");

    let response = registry
        .term_search("test", "idx1", &TermQuery::new("userid", "user01"))
        .await
        .unwrap();
    assert_eq!(response.total, 1);

    let outcome = registry.delete_document("test", "idx1", "1").await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);

    registry.close_all();
    assert!(client.is_closed());
    assert!(matches!(
        registry.get_client("test"),
        Err(SearchError::NotRegistered(_))
    ));
}

#[tokio::test]
async fn test_registry_connection_sends_raw_requests() {
    let server = MockServer::start().await;
    mount_backend(&server).await;
    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"cluster_name": "test", "status": "green"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = MapConfigSource(HashMap::from([(
        "test".to_string(),
        ConnectionConfig::new(server.uri()),
    )]));
    let registry = ClientRegistry::with_opensearch();
    registry.initialize_all(&source, ["test"]).await;

    let connection = registry.connection("test").unwrap();
    let response = connection
        .cluster()
        .health(ClusterHealthParts::None)
        .send()
        .await
        .unwrap();
    assert!(response.status_code().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "green");

    assert!(matches!(
        registry.connection("other"),
        Err(SearchError::NotRegistered(_))
    ));

    // A handle closed behind the registry's back stays registered but unusable.
    registry.get_client("test").unwrap().close();
    assert!(matches!(
        registry.connection("test"),
        Err(SearchError::ClientClosed(_))
    ));

    registry.close_all();
    assert!(matches!(
        registry.connection("test"),
        Err(SearchError::NotRegistered(_))
    ));
}
