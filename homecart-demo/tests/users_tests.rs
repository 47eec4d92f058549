use chrono::{TimeZone, Utc};
use homecart_demo::{
    UserProvisioner, DEMO_HOUSEHOLD_ID, DEMO_STORES, DEMO_USERS, LEGACY_PLACEHOLDER_IDS,
};
use homecart_model::{collections, UserDoc};
use homecart_store::{AuthDirectory, DocumentStore, MemoryDirectory, MemoryStore, NewAuthUser};
use pretty_assertions::assert_eq;
use serde_json::json;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 11, 9, 0, 0).unwrap()
}

#[tokio::test]
async fn provisioning_creates_accounts_and_profiles() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    let provisioner = UserProvisioner::new(&directory, &store);

    let report = provisioner
        .provision(DEMO_USERS, DEMO_HOUSEHOLD_ID, DEMO_STORES, now())
        .await;

    assert_eq!(report.created, 3);
    assert_eq!(report.existing, 0);
    assert!(report.is_clean());
    assert_eq!(directory.user_count(), 3);
    assert_eq!(store.len(collections::USERS), 3);

    let danny = &report.users[0];
    let doc = store
        .get(collections::USERS, &danny.uid)
        .await
        .unwrap()
        .unwrap();
    let profile: UserDoc = doc.parse().unwrap();
    assert_eq!(profile.id, danny.uid);
    assert_eq!(profile.household_id, DEMO_HOUSEHOLD_ID);
    assert_eq!(profile.email, "danny@demo.com");
    assert!(profile.is_admin);
    assert_eq!(profile.weekly_budget, 1500.0);
    assert_eq!(profile.preferred_stores.len(), 3);

    // The child's profile has no budget and no admin bit.
    let yoni = &report.users[2];
    let profile: UserDoc = store
        .get(collections::USERS, &yoni.uid)
        .await
        .unwrap()
        .unwrap()
        .parse()
        .unwrap();
    assert!(!profile.is_admin);
    assert_eq!(profile.weekly_budget, 0.0);
}

#[tokio::test]
async fn provisioning_twice_reuses_the_accounts() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    let provisioner = UserProvisioner::new(&directory, &store);

    let first = provisioner
        .provision(DEMO_USERS, DEMO_HOUSEHOLD_ID, DEMO_STORES, now())
        .await;
    let second = provisioner
        .provision(DEMO_USERS, DEMO_HOUSEHOLD_ID, DEMO_STORES, now())
        .await;

    assert_eq!(second.created, 0);
    assert_eq!(second.existing, 3);
    assert_eq!(directory.user_count(), 3);

    let uids_first: Vec<&str> = first.users.iter().map(|u| u.uid.as_str()).collect();
    let uids_second: Vec<&str> = second.users.iter().map(|u| u.uid.as_str()).collect();
    assert_eq!(uids_first, uids_second);
}

#[tokio::test]
async fn provisioning_syncs_a_stale_display_name() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    directory
        .create_user(NewAuthUser {
            email: "danny@demo.com".into(),
            password: "Demo123!".into(),
            display_name: "old name".into(),
            email_verified: true,
        })
        .await
        .unwrap();

    let provisioner = UserProvisioner::new(&directory, &store);
    provisioner
        .provision(&DEMO_USERS[..1], DEMO_HOUSEHOLD_ID, DEMO_STORES, now())
        .await;

    let account = directory.get_user_by_email("danny@demo.com").await.unwrap();
    assert_eq!(account.display_name.as_deref(), Some("דני כהן"));
}

#[tokio::test]
async fn provisioning_deletes_the_placeholder_docs() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    for id in LEGACY_PLACEHOLDER_IDS {
        store.insert_doc(collections::USERS, id, json!({ "id": id }));
    }

    UserProvisioner::new(&directory, &store)
        .provision(DEMO_USERS, DEMO_HOUSEHOLD_ID, DEMO_STORES, now())
        .await;

    for id in LEGACY_PLACEHOLDER_IDS {
        assert!(store.get(collections::USERS, id).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn repair_overwrites_and_strips_camel_case_fields() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    store.insert_doc(
        collections::USERS,
        "danny_demo_user",
        json!({
            "id": "danny_demo_user",
            "name": "דני",
            "householdId": "house_demo",
            "lastLoginAt": "2024-01-01T00:00:00Z",
            "createdAt": "2024-01-01T00:00:00Z",
            "avatar": "http://example.com/a.png"
        }),
    );
    store.insert_doc(
        collections::USERS,
        "sarah_demo_user",
        json!({ "id": "sarah_demo_user", "name": "שרה" }),
    );
    // yoni_demo_user intentionally missing.

    let report = UserProvisioner::new(&directory, &store)
        .repair_placeholder_docs(now())
        .await
        .unwrap();

    assert_eq!(report.repaired, 2);
    assert_eq!(report.skipped, 1);

    let doc = store
        .get(collections::USERS, "danny_demo_user")
        .await
        .unwrap()
        .unwrap();
    for legacy in ["householdId", "lastLoginAt", "createdAt", "avatar"] {
        assert!(doc.data.get(legacy).is_none(), "{legacy} survived repair");
    }
    let profile: UserDoc = doc.parse().unwrap();
    assert_eq!(profile.household_id, "house_demo");
    assert!(profile.is_admin);
}

#[tokio::test]
async fn cleanup_removes_placeholder_docs_in_one_batch() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    for id in LEGACY_PLACEHOLDER_IDS {
        store.insert_doc(collections::USERS, id, json!({ "id": id }));
    }

    let removed = UserProvisioner::new(&directory, &store)
        .remove_placeholder_docs()
        .await
        .unwrap();

    assert_eq!(removed, 3);
    assert_eq!(store.len(collections::USERS), 0);
    assert_eq!(store.commit_count(), 1);
}

#[tokio::test]
async fn lookup_reports_found_and_missing_accounts() {
    let store = MemoryStore::new();
    let directory = MemoryDirectory::new();
    directory
        .create_user(NewAuthUser {
            email: "danny@demo.com".into(),
            password: "Demo123!".into(),
            display_name: "דני כהן".into(),
            email_verified: true,
        })
        .await
        .unwrap();

    let results = UserProvisioner::new(&directory, &store)
        .lookup_all(DEMO_USERS)
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].1.is_some());
    assert!(results[1].1.is_none());
    assert!(results[2].1.is_none());
}
