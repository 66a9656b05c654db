//! Resource API route tests

use std::sync::Arc;

use motormate_client::api::{CartSource, UserOrderSource, UserVehicleSource, VehicleStatusSource};
use motormate_client::{
    ApiError, HttpClientConfig, ListRequest, LoginRequest, MotormateApi, MotormateHttpClient,
    ResourceApi, RoleUpdate, SearchParams, VehicleReview, VehicleStatus,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> MotormateApi {
    let http = MotormateHttpClient::new(HttpClientConfig::new(server.uri())).unwrap();
    MotormateApi::new(Arc::new(http))
}

fn vehicle_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "licensePlate": "59A-123.45",
        "city": "HCM",
        "price": 500000,
        "status": "Pending",
        "isLock": false
    })
}

#[tokio::test]
async fn test_vehicle_status_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicle/status/pending"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([vehicle_json("v1")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/vehicle/v1/status/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/vehicle/v1/lock"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let vehicles = api(&server).vehicle();
    let source = VehicleStatusSource::new(vehicles.clone(), VehicleStatus::Pending);
    let params: SearchParams = [("pageSize", "5")].into_iter().collect();
    let page = source.list(&ListRequest::new(params)).await.unwrap();
    assert_eq!(page.items[0].status(), Some(VehicleStatus::Pending));

    vehicles
        .update_status("v1", VehicleStatus::Denied)
        .await
        .unwrap();
    vehicles.lock("v1").await.unwrap();
}

#[tokio::test]
async fn test_user_routes_use_username() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/alice/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "username": "alice",
            "roles": ["Admin"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/user/role"))
        .and(body_json(json!({"username": "alice", "roles": ["Admin", "Lessor"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let users = api(&server).user();
    let alice = users.details("alice").await.unwrap();
    assert_eq!(alice.id, "u1");
    assert_eq!(users.route_key(&alice), "alice");

    users
        .update_role(&RoleUpdate {
            username: "alice".to_string(),
            roles: vec!["Admin".to_string(), "Lessor".to_string()],
        })
        .await
        .unwrap();
    ResourceApi::delete(&users, "alice").await.unwrap();
}

#[tokio::test]
async fn test_account_routes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/u1/lock"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let account = api(&server).account();
    let payload = account
        .login(&LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(payload["token"], "t");

    account
        .update_is_lock_user("u1", &json!({"isLock": true}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_catalog_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog/category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "c1", "name": "News"}])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/color/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "Red", "hexCode": "#ff0000"},
            {"id": "2", "name": "Blue", "hexCode": "#0000ff"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/model/collection/col-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "m1", "name": "Vision"}])))
        .mount(&server)
        .await;

    let api = api(&server);
    let categories = api.category().all().await.unwrap();
    assert_eq!(categories[0].name, "News");

    let colors = api
        .color()
        .bulk_create(&json!([{"name": "Red"}, {"name": "Blue"}]))
        .await
        .unwrap();
    assert_eq!(colors.len(), 2);

    let models = api.model_vehicle().by_collection("col-1").await.unwrap();
    assert_eq!(models[0].name, "Vision");
}

#[tokio::test]
async fn test_storefront_sources_require_scope() {
    let server = MockServer::start().await;
    let api = api(&server);

    let cart = CartSource::new(api.cart());
    let err = cart
        .list(&ListRequest::new(SearchParams::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingScope));

    let products = UserVehicleSource::new(api.vehicle());
    let err = products
        .list(&ListRequest::new(SearchParams::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingScope));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_storefront_scoped_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/order/user/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"parentOrderId": "P-1", "shops": []}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/cart/u1/v9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vehicleId": "v9"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/order/review"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let orders = UserOrderSource::new(api.order())
        .list(&ListRequest::scoped("u1", SearchParams::new()))
        .await
        .unwrap();
    assert_eq!(orders.items[0].parent_order_id, "P-1");

    let item = api.cart().add("u1", "v9").await.unwrap();
    assert_eq!(item.vehicle_id, "v9");

    api.order()
        .review_vehicle(&VehicleReview {
            order_id: "P-1".to_string(),
            vehicle_id: "v9".to_string(),
            rating: 5,
            content: "Great ride".to_string(),
            images: vec![],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_chart_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chart/revenue/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"month": 1, "revenue": 1000},
            {"month": 2, "revenue": 2500}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/chart/total/views/2024/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"day": 1, "views": 7}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/chart/total/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 42, "percent": 5.5})))
        .mount(&server)
        .await;

    let chart = api(&server).chart();
    let revenue = chart.revenue_in_year(2024).await.unwrap();
    assert_eq!(revenue[1].revenue, 2500.0);

    let views = chart.total_views_of_month(2024, 3).await.unwrap();
    assert_eq!(views[0].views, 7);

    let users = chart.total_users().await.unwrap();
    assert_eq!(users.total, 42.0);
    assert_eq!(users.percent, Some(5.5));
}
