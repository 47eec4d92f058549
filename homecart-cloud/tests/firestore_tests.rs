use homecart_cloud::{AdminConfig, FirestoreStore};
use homecart_store::{DocumentStore, StoreError, WriteOp};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn setup(server: &MockServer) -> FirestoreStore {
    let config = AdminConfig::for_base_url(&server.uri(), "homecart-test");
    FirestoreStore::new(&config, "test-token".into())
}

const DOCS_ROOT: &str = "/projects/homecart-test/databases/(default)/documents";

#[tokio::test]
async fn get_decodes_typed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS_ROOT}/users/u1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/homecart-test/databases/(default)/documents/users/u1",
            "fields": {
                "name": { "stringValue": "דני כהן" },
                "weekly_budget": { "integerValue": "1500" },
                "is_admin": { "booleanValue": true },
                "joined_at": { "timestampValue": "2025-10-01T08:00:00Z" },
                "preferred_stores": { "arrayValue": { "values": [
                    { "stringValue": "שופרסל" },
                    { "stringValue": "רמי לוי" }
                ]}}
            },
            "createTime": "2025-10-01T08:00:00Z",
            "updateTime": "2025-10-01T08:00:00Z"
        })))
        .mount(&server)
        .await;

    let store = setup(&server);
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.id, "u1");
    assert_eq!(
        doc.data,
        json!({
            "name": "דני כהן",
            "weekly_budget": 1500,
            "is_admin": true,
            "joined_at": "2025-10-01T08:00:00Z",
            "preferred_stores": ["שופרסל", "רמי לוי"],
        })
    );
}

#[tokio::test]
async fn get_of_missing_document_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS_ROOT}/users/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "Document not found", "status": "NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    let store = setup(&server);
    assert!(store.get("users", "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn commit_sends_writes_with_masks_and_transforms() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{DOCS_ROOT}:commit")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "writeResults": [] })))
        .mount(&server)
        .await;

    let store = setup(&server);
    let mut fields = serde_json::Map::new();
    fields.insert("type".into(), json!("supermarket"));
    store
        .commit(&[
            WriteOp::set("products", "7290000000001", json!({ "name": "חלב 3%", "price": 6.5 }))
                .with_server_stamp("lastUpdate"),
            WriteOp::update("shopping_lists", "l1", fields)
                .with_server_stamp("updated_date")
                .with_field_delete("householdId"),
            WriteOp::delete("users", "old_user"),
        ])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let writes = body["writes"].as_array().unwrap();
    assert_eq!(writes.len(), 3);

    // Overwrite set: no mask, one server-time transform.
    assert!(writes[0].get("updateMask").is_none());
    assert_eq!(
        writes[0]["updateTransforms"],
        json!([{ "fieldPath": "lastUpdate", "setToServerTime": "REQUEST_TIME" }])
    );
    assert_eq!(
        writes[0]["update"]["fields"]["price"],
        json!({ "doubleValue": 6.5 })
    );

    // Update: mask covers written and deleted fields, existence required.
    let mask: Vec<&str> = writes[1]["updateMask"]["fieldPaths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert_eq!(mask, vec!["type", "householdId"]);
    assert!(writes[1]["update"]["fields"].get("householdId").is_none());
    assert_eq!(writes[1]["currentDocument"], json!({ "exists": true }));

    // Delete is just the document name.
    assert_eq!(
        writes[2]["delete"],
        json!("projects/homecart-test/databases/(default)/documents/users/old_user")
    );
}

#[tokio::test]
async fn merged_set_masks_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{DOCS_ROOT}:commit")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "writeResults": [] })))
        .mount(&server)
        .await;

    let store = setup(&server);
    store
        .commit(&[WriteOp::set_merged(
            "users",
            "u1",
            json!({ "last_login_at": "2025-10-11T10:00:00Z" }),
        )])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body["writes"][0]["updateMask"],
        json!({ "fieldPaths": ["last_login_at"] })
    );
}

#[tokio::test]
async fn query_eq_builds_an_equality_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{DOCS_ROOT}:runQuery")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "document": {
                    "name": "projects/homecart-test/databases/(default)/documents/shopping_lists/l1",
                    "fields": { "type": { "stringValue": "super" } }
                },
                "readTime": "2025-10-11T10:00:00Z"
            },
            { "readTime": "2025-10-11T10:00:00Z" }
        ])))
        .mount(&server)
        .await;

    let store = setup(&server);
    let docs = store
        .query_eq("shopping_lists", "type", &json!("super"))
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "l1");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body["structuredQuery"]["where"]["fieldFilter"],
        json!({
            "field": { "fieldPath": "type" },
            "op": "EQUAL",
            "value": { "stringValue": "super" },
        })
    );
}

#[tokio::test]
async fn list_limits_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{DOCS_ROOT}:runQuery")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = setup(&server);
    let docs = store.list("products", 100).await.unwrap();
    assert!(docs.is_empty());

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["structuredQuery"]["limit"], json!(100));
    assert_eq!(
        body["structuredQuery"]["from"],
        json!([{ "collectionId": "products" }])
    );
}

#[tokio::test]
async fn failed_commit_surfaces_the_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{DOCS_ROOT}:commit")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "Missing or insufficient permissions", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    let store = setup(&server);
    let err = store
        .commit(&[WriteOp::set("products", "p1", json!({ "name": "x" }))])
        .await
        .unwrap_err();
    match err {
        StoreError::Backend(message) => assert!(message.contains("403")),
        other => panic!("unexpected error: {other}"),
    }
}
