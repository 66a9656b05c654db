//! Account session against a mock backend

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use motormate_client::{
    ErrorPolicy, HttpClientConfig, Level, LoginRequest, NoopNavigator, Notification,
    NotificationQueue,
};
use motormate_store::account::token::claims;
use motormate_store::account::{INVALID_TOKEN_MESSAGE, SIGN_OUT_MESSAGE};
use motormate_store::storage::USER_KEY;
use motormate_store::{
    FileStorage, MemoryStorage, Storage, StoreDeps, StoreError, StoreOptions, StorefrontStore,
    TokenError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token(username: &str, exp: i64) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert(claims::USERNAME.into(), json!(username));
    payload.insert(claims::NAME.into(), json!("Alice Nguyen"));
    payload.insert(claims::EMAIL.into(), json!("alice@example.com"));
    payload.insert(claims::ROLE.into(), json!("Lessor"));
    payload.insert(claims::AVATAR.into(), json!("https://cdn.example.com/alice.png"));
    payload.insert("exp".into(), json!(exp));
    encode(
        &Header::default(),
        &payload,
        &EncodingKey::from_secret(b"server-secret"),
    )
    .unwrap()
}

fn valid_token(username: &str) -> String {
    token(username, Utc::now().timestamp() + 3600)
}

struct Harness {
    store: Arc<StorefrontStore>,
    storage: Arc<dyn Storage>,
    notifications: Arc<NotificationQueue>,
}

fn harness(server: &MockServer, policy: ErrorPolicy, storage: Arc<dyn Storage>) -> Harness {
    let notifications = Arc::new(NotificationQueue::new());
    let deps = StoreDeps::new(storage.clone(), notifications.clone(), Arc::new(NoopNavigator));
    let store = StorefrontStore::new(
        HttpClientConfig::new(server.uri()).with_error_policy(policy),
        StoreOptions::default(),
        deps,
    )
    .unwrap();
    Harness {
        store,
        storage,
        notifications,
    }
}

fn credentials() -> LoginRequest {
    LoginRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_rejected_login_notifies_once_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "title": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin, Arc::new(MemoryStorage::new()));
    let err = h.store.account.sign_in(&credentials()).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(h.store.account.user().is_none());
    assert!(h.storage.get(USER_KEY).unwrap().is_none());
    assert_eq!(
        h.notifications.drain(),
        vec![Notification::new(Level::Error, "Invalid credentials")]
    );
}

#[tokio::test]
async fn test_sign_in_persists_user_and_authorizes_requests() {
    let server = MockServer::start().await;
    let jwt = valid_token("alice");
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "alice", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": jwt })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/details"))
        .and(header("authorization", format!("Bearer {jwt}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "username": "alice",
            "fullName": "Alice Nguyen",
            "email": "alice@example.com",
            "roles": ["Lessor"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Storefront, Arc::new(MemoryStorage::new()));
    let user = h.store.account.sign_in(&credentials()).await.unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.role, "Lessor");
    assert_eq!(user.token, jwt);
    let stored = h.storage.get(USER_KEY).unwrap().unwrap();
    assert!(stored.contains(&jwt));

    let detail = h.store.refresh_profile().await.unwrap().unwrap();
    assert_eq!(detail.id, "u-1");
    assert_eq!(h.store.cart.scope().as_deref(), Some("u-1"));
    assert_eq!(h.store.user_orders.scope().as_deref(), Some("u-1"));
    assert!(!h.store.account.is_user_loading());

    h.store.sign_out().unwrap();
    assert!(h.store.account.user().is_none());
    assert!(h.store.account.user_detail().is_none());
    assert!(h.store.cart.scope().is_none());
    assert!(h.storage.get(USER_KEY).unwrap().is_none());
    assert_eq!(
        h.notifications.drain(),
        vec![Notification::new(Level::Success, SIGN_OUT_MESSAGE)]
    );
}

#[tokio::test]
async fn test_restore_discards_expired_token() {
    let server = MockServer::start().await;
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let expired = token("alice", Utc::now().timestamp() - 60);
    storage
        .set(USER_KEY, &json!({ "token": expired }).to_string())
        .unwrap();

    let h = harness(&server, ErrorPolicy::Storefront, storage);
    let err = h.store.account.restore().unwrap_err();

    assert!(matches!(err, StoreError::Token(TokenError::Expired)));
    assert!(h.store.account.user().is_none());
    assert!(h.storage.get(USER_KEY).unwrap().is_none());
    assert_eq!(
        h.notifications.drain(),
        vec![Notification::new(Level::Error, INVALID_TOKEN_MESSAGE)]
    );
}

#[tokio::test]
async fn test_restore_from_file_storage_across_stores() {
    let server = MockServer::start().await;
    let jwt = valid_token("bob");
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": jwt })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = harness(
        &server,
        ErrorPolicy::Storefront,
        Arc::new(FileStorage::open(dir.path()).unwrap()),
    );
    first.store.account.sign_in(&credentials()).await.unwrap();

    let second = harness(
        &server,
        ErrorPolicy::Storefront,
        Arc::new(FileStorage::open(dir.path()).unwrap()),
    );
    assert!(second.store.account.user().is_none());
    let restored = second.store.account.restore().unwrap().unwrap();
    assert_eq!(restored.username, "bob");
    assert!(second.store.account.session().is_signed_in());
    assert!(second.notifications.is_empty());
}

#[tokio::test]
async fn test_profile_fetch_without_stored_user_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Storefront, Arc::new(MemoryStorage::new()));
    assert!(h.store.refresh_profile().await.unwrap().is_none());
    assert!(h.store.cart.scope().is_none());
}
