use chrono::Duration;

use buds_otp::store::CredentialStore;

use buds_testing::store::MemorySecureStore;

#[tokio::test]
async fn should_round_trip_code_within_ttl() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store);

    credentials
        .put_code("a@b.com", "482913", Duration::seconds(600))
        .await
        .unwrap();

    let record = credentials.get_code("a@b.com").await.unwrap().unwrap();
    assert_eq!(record.code, "482913");
    assert_eq!(record.ttl_ms, 600_000);
}

#[tokio::test]
async fn should_purge_expired_code_on_read() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store.clone());

    credentials
        .put_code("a@b.com", "482913", Duration::milliseconds(1))
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    assert!(credentials.get_code("a@b.com").await.unwrap().is_none());
    assert!(store.entries_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_purge_undecodable_record_on_read() {
    let store = MemorySecureStore::new();
    store.insert_raw("verification_code:a@b.com", "not json at all");

    let credentials = CredentialStore::new(store.clone());
    assert!(credentials.get_code("a@b.com").await.unwrap().is_none());
    assert!(store.entries_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_delete_idempotently() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store);

    // Deleting keys that were never written is not an error.
    credentials.delete_code("nobody@example.com").await.unwrap();
    credentials.delete_secret("nobody").await.unwrap();
    credentials.delete_last_step("nobody").await.unwrap();
}

#[tokio::test]
async fn should_overwrite_code_for_same_subject() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store.clone());

    credentials
        .put_code("a@b.com", "111111", Duration::seconds(600))
        .await
        .unwrap();
    credentials
        .put_code("a@b.com", "222222", Duration::seconds(600))
        .await
        .unwrap();

    let record = credentials.get_code("a@b.com").await.unwrap().unwrap();
    assert_eq!(record.code, "222222");
    assert_eq!(store.entries_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_keep_subjects_independent() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store);

    credentials
        .put_code("a@b.com", "111111", Duration::seconds(600))
        .await
        .unwrap();
    credentials
        .put_code("c@d.com", "222222", Duration::seconds(600))
        .await
        .unwrap();

    credentials.delete_code("a@b.com").await.unwrap();

    assert!(credentials.get_code("a@b.com").await.unwrap().is_none());
    let record = credentials.get_code("c@d.com").await.unwrap().unwrap();
    assert_eq!(record.code, "222222");
}

#[tokio::test]
async fn should_store_secret_without_expiry() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store);

    credentials
        .put_secret("user-1", "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ")
        .await
        .unwrap();

    assert_eq!(
        credentials.get_secret("user-1").await.unwrap().as_deref(),
        Some("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ")
    );

    credentials.delete_secret("user-1").await.unwrap();
    assert!(credentials.get_secret("user-1").await.unwrap().is_none());
}

#[tokio::test]
async fn should_round_trip_last_accepted_step() {
    let store = MemorySecureStore::new();
    let credentials = CredentialStore::new(store);

    assert!(credentials.get_last_step("user-1").await.unwrap().is_none());

    credentials.put_last_step("user-1", 55_555_555).await.unwrap();
    assert_eq!(
        credentials.get_last_step("user-1").await.unwrap(),
        Some(55_555_555)
    );

    credentials.delete_last_step("user-1").await.unwrap();
    assert!(credentials.get_last_step("user-1").await.unwrap().is_none());
}
