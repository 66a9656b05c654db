//! HTTP client wrapper tests against a mock backend

use std::sync::Arc;

use motormate_client::{
    ApiError, Brand, ErrorKind, ErrorPolicy, HttpClientConfig, Level, MetaData, MotormateApi,
    MotormateHttpClient, Notification, NotificationQueue, ResponseBody, RouteRecorder,
    SearchParams, StaticToken,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    http: Arc<MotormateHttpClient>,
    notifications: Arc<NotificationQueue>,
    routes: Arc<RouteRecorder>,
    token: Arc<StaticToken>,
}

fn harness(server: &MockServer, policy: ErrorPolicy) -> Harness {
    let notifications = Arc::new(NotificationQueue::new());
    let routes = Arc::new(RouteRecorder::new());
    let token = Arc::new(StaticToken::default());
    let http = MotormateHttpClient::new(
        HttpClientConfig::new(server.uri()).with_error_policy(policy),
    )
    .unwrap()
    .with_token_provider(token.clone())
    .with_notifier(notifications.clone())
    .with_navigator(routes.clone());
    Harness {
        http: Arc::new(http),
        notifications,
        routes,
        token,
    }
}

fn pagination(current_page: u32, total_pages: u32, page_size: u32, total: u64) -> String {
    json!({
        "currentPage": current_page,
        "itemsPerPage": page_size,
        "totalItems": total,
        "totalPages": total_pages,
    })
    .to_string()
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brand/all"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "b1", "name": "Honda"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    h.token.set("token-123");

    let brands = MotormateApi::new(h.http.clone()).brand().all().await.unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "Honda");
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brand/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    h.http.get("api/brand/all", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_pagination_header_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brand"))
        .and(query_param("pageSize", "5"))
        .and(query_param_is_missing("pageNumber"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-pagination", pagination(1, 3, 5, 12).as_str())
                .set_body_json(json!([
                    {"id": "b1", "name": "Honda"},
                    {"id": "b2", "name": "Yamaha"}
                ])),
        )
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let params: SearchParams = [("pageSize", "5")].into_iter().collect();

    let body = h.http.get("api/brand", Some(&params)).await.unwrap();
    assert_eq!(
        body.pagination(),
        Some(&MetaData {
            current_page: 1,
            total_pages: 3,
            page_size: 5,
            total_count: 12,
        })
    );

    let page = h.http.get_page::<Brand>("api/brand", Some(&params)).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.meta_data.map(|m| m.total_count), Some(12));
}

#[tokio::test]
async fn test_plain_body_without_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brand/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "b1", "name": "Honda"})))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let body = h.http.get("api/brand/b1", None).await.unwrap();
    assert!(matches!(body, ResponseBody::Plain(_)));
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/brand/b1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let body = h.http.delete("api/brand/b1").await.unwrap();
    assert_eq!(body, ResponseBody::Plain(serde_json::Value::Null));
}

#[tokio::test]
async fn test_malformed_pagination_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brand"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-pagination", "not-json")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let err = h.http.get("api/brand", None).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidPagination(_)));
}

#[tokio::test]
async fn test_admin_400_flattens_validation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/brand"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": {
                "Name": ["Name is required"],
                "Image": ["Image is required", "Image is too large"]
            },
            "message": "Validation failed"
        })))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let err = h
        .http
        .post("api/brand", &json!({"name": ""}))
        .await
        .unwrap_err();

    let response = err.response().unwrap();
    assert_eq!(response.kind(), ErrorKind::Validation);
    assert_eq!(err.status(), Some(400));

    let notifications = h.notifications.drain();
    assert_eq!(notifications.len(), 2);
    // Fields keep the order the server sent them in
    assert_eq!(
        notifications[0].message,
        "Name is required,Image is required,Image is too large"
    );
    assert_eq!(
        notifications[1],
        Notification::new(Level::Error, "Validation failed")
    );
    assert!(h.routes.routes().is_empty());
}

#[tokio::test]
async fn test_admin_401_shows_title() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"title": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let err = h
        .http
        .post("api/auth/login", &json!({"username": "a", "password": "b"}))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(
        h.notifications.drain(),
        vec![Notification::new(Level::Error, "Invalid credentials")]
    );
}

#[tokio::test]
async fn test_admin_500_notifies_and_navigates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicle"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let err = h.http.get("api/vehicle", None).await.unwrap_err();

    assert_eq!(err.response().map(|r| r.kind()), Some(ErrorKind::ServerFault));
    assert_eq!(
        h.notifications.drain(),
        vec![Notification::new(Level::Error, "boom")]
    );
    assert_eq!(h.routes.routes(), vec!["/server-error".to_string()]);
}

#[tokio::test]
async fn test_unmapped_status_is_silent_but_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicle"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Admin);
    let err = h.http.get("api/vehicle", None).await.unwrap_err();

    let response = err.response().unwrap();
    assert_eq!(response.status, 418);
    assert_eq!(response.body, json!("teapot"));
    assert!(h.notifications.is_empty());
    assert!(h.routes.routes().is_empty());
}

#[tokio::test]
async fn test_storefront_policy_uses_first_validation_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-up"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [
                {"code": "DuplicateUserName", "description": "Username is taken"},
                {"code": "PasswordTooShort", "description": "Password is too short"}
            ]
        })))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Storefront);
    h.http
        .post("api/auth/sign-up", &json!({"username": "bob"}))
        .await
        .unwrap_err();

    assert_eq!(
        h.notifications.drain(),
        vec![Notification::new(Level::Error, "Username is taken")]
    );
}

#[tokio::test]
async fn test_storefront_500_navigates_without_notification() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart/u1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let h = harness(&server, ErrorPolicy::Storefront);
    h.http.get("api/cart/u1", None).await.unwrap_err();

    assert!(h.notifications.is_empty());
    assert_eq!(h.routes.last().as_deref(), Some("/server-error"));
}

#[tokio::test]
async fn test_transport_failure_is_not_intercepted() {
    let notifications = Arc::new(NotificationQueue::new());
    let http = MotormateHttpClient::new(
        HttpClientConfig::new("http://127.0.0.1:1").with_timeouts(200, 500),
    )
    .unwrap()
    .with_notifier(notifications.clone());

    let err = http.get("api/brand", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.status().is_none());
    assert!(notifications.is_empty());
}
