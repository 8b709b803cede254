//! Integration tests for the MongoDB-backed mutex.

use mongodb::Client;
use resource_mutex::{MongoLockStore, ResourceMutexBuilder};

/// Helper to get MongoDB URI from environment or use default.
fn get_mongo_uri() -> String {
    std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

async fn get_store() -> MongoLockStore {
    let client = Client::with_uri_str(&get_mongo_uri())
        .await
        .expect("Failed to connect to MongoDB");
    MongoLockStore::new(client.database("test_resource_mutex"), None)
}

#[tokio::test]
#[ignore] // Requires MongoDB server running
async fn test_mongo_lock_claim_and_release() {
    let store = get_store().await;

    // Fresh resource per run so leftover records never interfere
    let resource_id = uuid::Uuid::new_v4().to_string();

    let mutex = ResourceMutexBuilder::new("environment", &resource_id)
        .held_by("itest-client")
        .build(store.clone());

    // 1. Claim
    assert!(mutex.lock().await.expect("Failed to call lock"));

    // 2. A contender loses
    let contender = ResourceMutexBuilder::new("environment", &resource_id)
        .held_by("itest-contender")
        .build(store.clone());
    assert!(!contender.lock().await.expect("Failed to call lock"));

    // 3. The record identifies the winner
    let holder = mutex
        .holder()
        .await
        .expect("Failed to read holder")
        .expect("Record should exist");
    assert_eq!(holder.held_by, "itest-client");

    // 4. Release, then the contender wins
    assert!(mutex.unlock().await);
    assert!(contender.lock().await.expect("Failed to call lock"));
    assert!(contender.unlock().await);
}

#[tokio::test]
#[ignore] // Requires MongoDB server running
async fn test_mongo_forced_claim_replaces_holder() {
    let store = get_store().await;
    let resource_id = uuid::Uuid::new_v4().to_string();

    let mutex = ResourceMutexBuilder::new("node", &resource_id)
        .held_by("itest-client")
        .build(store.clone());
    assert!(mutex.lock().await.expect("Failed to call lock"));

    let forcer = ResourceMutexBuilder::new("node", &resource_id)
        .held_by("itest-forcer")
        .force(true)
        .build(store.clone());
    assert!(forcer.lock().await.expect("Failed to call lock"));

    let holder = forcer
        .holder()
        .await
        .expect("Failed to read holder")
        .expect("Record should exist");
    assert_eq!(holder.held_by, "itest-forcer");

    assert!(forcer.unlock().await);
}
