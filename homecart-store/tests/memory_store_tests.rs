use chrono::{DateTime, Utc};
use homecart_store::{
    AuthDirectory, AuthUserUpdate, DocumentStore, MemoryDirectory, MemoryStore, NewAuthUser,
    StoreError, WriteOp,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn set_then_get_round_trips() {
    let store = MemoryStore::new();
    store
        .commit(&[WriteOp::set("users", "u1", json!({ "name": "דני" }))])
        .await
        .unwrap();

    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.data, json!({ "name": "דני" }));
    assert!(store.get("users", "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn overwrite_set_drops_unlisted_fields() {
    let store = MemoryStore::new();
    store.insert_doc("users", "u1", json!({ "name": "a", "extra": 1 }));

    store
        .commit(&[WriteOp::set("users", "u1", json!({ "name": "b" }))])
        .await
        .unwrap();

    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.data, json!({ "name": "b" }));
}

#[tokio::test]
async fn merged_set_keeps_unlisted_fields() {
    let store = MemoryStore::new();
    store.insert_doc("users", "u1", json!({ "name": "a", "extra": 1 }));

    store
        .commit(&[WriteOp::set_merged("users", "u1", json!({ "name": "b" }))])
        .await
        .unwrap();

    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.data, json!({ "name": "b", "extra": 1 }));
}

#[tokio::test]
async fn server_stamp_writes_a_parseable_timestamp() {
    let store = MemoryStore::new();
    store
        .commit(&[
            WriteOp::set("products", "p1", json!({ "name": "x" })).with_server_stamp("lastUpdate")
        ])
        .await
        .unwrap();

    let doc = store.get("products", "p1").await.unwrap().unwrap();
    let stamp = doc.data["lastUpdate"].as_str().unwrap();
    let parsed: DateTime<Utc> = stamp.parse().unwrap();
    assert!(parsed <= Utc::now());
}

#[tokio::test]
async fn field_delete_removes_keys() {
    let store = MemoryStore::new();
    store.insert_doc(
        "users",
        "u1",
        json!({ "name": "a", "householdId": "legacy", "avatar": "x" }),
    );

    store
        .commit(&[WriteOp::update("users", "u1", serde_json::Map::new())
            .with_field_delete("householdId")
            .with_field_delete("avatar")])
        .await
        .unwrap();

    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.data, json!({ "name": "a" }));
}

#[tokio::test]
async fn update_of_missing_document_fails_without_side_effects() {
    let store = MemoryStore::new();
    store.insert_doc("users", "u1", json!({ "name": "a" }));

    let mut fields = serde_json::Map::new();
    fields.insert("name".into(), json!("b"));
    let err = store
        .commit(&[
            WriteOp::update("users", "u1", fields),
            WriteOp::update("users", "missing", serde_json::Map::new()),
        ])
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    // The batch validated before mutating: u1 is untouched.
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.data["name"], json!("a"));
    assert_eq!(store.commit_count(), 0);
}

#[tokio::test]
async fn delete_of_missing_document_is_a_no_op() {
    let store = MemoryStore::new();
    store
        .commit(&[WriteOp::delete("users", "missing")])
        .await
        .unwrap();
    assert_eq!(store.commit_count(), 1);
}

#[tokio::test]
async fn query_eq_filters_on_top_level_field() {
    let store = MemoryStore::new();
    store.insert_doc("shopping_lists", "l1", json!({ "type": "super" }));
    store.insert_doc("shopping_lists", "l2", json!({ "type": "pharmacy" }));
    store.insert_doc("shopping_lists", "l3", json!({ "type": "super" }));

    let docs = store
        .query_eq("shopping_lists", "type", &json!("super"))
        .await
        .unwrap();
    let mut ids: Vec<_> = docs.iter().map(|doc| doc.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["l1", "l3"]);
}

#[tokio::test]
async fn list_respects_limit() {
    let store = MemoryStore::new();
    for i in 0..10 {
        store.insert_doc("products", &format!("p{i}"), json!({ "n": i }));
    }
    assert_eq!(store.list("products", 4).await.unwrap().len(), 4);
    assert_eq!(store.list("products", 100).await.unwrap().len(), 10);
}

#[tokio::test]
async fn oversized_batch_is_rejected() {
    let store = MemoryStore::new();
    let writes: Vec<_> = (0..501)
        .map(|i| WriteOp::set("products", format!("p{i}"), json!({})))
        .collect();

    let err = store.commit(&writes).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::BatchTooLarge { size: 501, max: 500 }
    ));
}

// --- Directory ---

fn demo_account() -> NewAuthUser {
    NewAuthUser {
        email: "danny@demo.com".into(),
        password: "Demo123!".into(),
        display_name: "דני כהן".into(),
        email_verified: true,
    }
}

#[tokio::test]
async fn missing_email_is_a_distinguished_error() {
    let directory = MemoryDirectory::new();
    let err = directory.get_user_by_email("nobody@demo.com").await.unwrap_err();
    assert!(matches!(err, StoreError::UserNotFound(_)));
}

#[tokio::test]
async fn created_user_is_found_by_email() {
    let directory = MemoryDirectory::new();
    let created = directory.create_user(demo_account()).await.unwrap();

    let found = directory.get_user_by_email("danny@demo.com").await.unwrap();
    assert_eq!(found.uid, created.uid);
    assert_eq!(found.display_name.as_deref(), Some("דני כהן"));
    assert!(found.email_verified);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let directory = MemoryDirectory::new();
    directory.create_user(demo_account()).await.unwrap();

    let err = directory.create_user(demo_account()).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail(_)));
}

#[tokio::test]
async fn update_changes_display_name() {
    let directory = MemoryDirectory::new();
    let created = directory.create_user(demo_account()).await.unwrap();

    let updated = directory
        .update_user(
            &created.uid,
            AuthUserUpdate {
                display_name: Some("דני".into()),
                password: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.display_name.as_deref(), Some("דני"));
}

#[tokio::test]
async fn delete_removes_the_account() {
    let directory = MemoryDirectory::new();
    let created = directory.create_user(demo_account()).await.unwrap();

    directory.delete_user(&created.uid).await.unwrap();
    assert_eq!(directory.user_count(), 0);
    assert!(directory.delete_user(&created.uid).await.is_err());
}
