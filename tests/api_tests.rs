use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use coffeehouse::api::AppState;
use coffeehouse::config::Config;
use coffeehouse::services::SeedService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Products in the bundled fixture at data/products.json.
const FIXTURE_PRODUCT_COUNT: u64 = 6;

async fn spawn_state() -> Arc<AppState> {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // In-memory sqlite is per-connection, so the pool must stay at one.
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;

    let state = coffeehouse::api::create_app_state(config)
        .await
        .expect("Failed to create app state");

    SeedService::new(Arc::clone(&state.products), "data/products.json")
        .run()
        .await
        .expect("Failed to seed products");

    state
}

async fn spawn_app() -> Router {
    coffeehouse::api::router(spawn_state().await)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn get_with_token(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, body: &Value, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn register_body(login: &str) -> Value {
    json!({
        "login": login,
        "password": "secret1",
        "confirmPassword": "secret1",
        "city": "Lisbon",
        "street": "Rua Augusta",
        "houseNumber": 12,
        "paymentMethod": "card",
    })
}

#[tokio::test]
async fn test_app_info() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Coffee House API is running!");
    assert!(body["data"]["endpoints"]["products"].is_object());
}

#[tokio::test]
async fn test_register_and_profile() {
    let app = spawn_app().await;

    let (status, body) = post_json(&app, "/auth/register", &register_body("alice"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["user"]["login"], "alice");
    assert_eq!(body["data"]["user"]["paymentMethod"], "card");
    assert!(body["data"]["access_token"].is_string());
    // The stored hash must never surface in a response.
    assert!(!body.to_string().to_lowercase().contains("password"));

    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    let (status, body) = get_with_token(&app, "/auth/profile", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["login"], "alice");
    assert!(!body.to_string().to_lowercase().contains("password"));
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = spawn_app().await;

    let mut body = register_body("bob");
    body["confirmPassword"] = json!("different1");

    let (status, body) = post_json(&app, "/auth/register", &body, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Passwords do not match");
}

#[tokio::test]
async fn test_register_duplicate_login() {
    let app = spawn_app().await;

    let (status, _) = post_json(&app, "/auth/register", &register_body("carol"), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/auth/register", &register_body("carol"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with this login already exists");
}

#[tokio::test]
async fn test_register_rejects_bad_shapes() {
    let app = spawn_app().await;

    let mut extra_field = register_body("dave");
    extra_field["isAdmin"] = json!(true);
    let (status, _) = post_json(&app, "/auth/register", &extra_field, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_login = register_body("1dave");
    bad_login["login"] = json!("1dave");
    let (status, _) = post_json(&app, "/auth/register", &bad_login, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut short_password = register_body("dave");
    short_password["password"] = json!("abc");
    short_password["confirmPassword"] = json!("abc");
    let (status, _) = post_json(&app, "/auth/register", &short_password, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_house = register_body("dave");
    bad_house["houseNumber"] = json!(0);
    let (status, _) = post_json(&app, "/auth/register", &bad_house, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login() {
    let app = spawn_app().await;

    post_json(&app, "/auth/register", &register_body("erin"), None).await;

    let (status, body) = post_json(
        &app,
        "/auth/login",
        &json!({"login": "erin", "password": "secret1"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["login"], "erin");
    assert!(body["data"]["access_token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = spawn_app().await;

    post_json(&app, "/auth/register", &register_body("frank"), None).await;

    let (wrong_pw_status, wrong_pw_body) = post_json(
        &app,
        "/auth/login",
        &json!({"login": "frank", "password": "wrong-password"}),
        None,
    )
    .await;
    let (unknown_status, unknown_body) = post_json(
        &app,
        "/auth/login",
        &json!({"login": "nobody", "password": "secret1"}),
        None,
    )
    .await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw_body, unknown_body);
    assert_eq!(wrong_pw_body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_profile_requires_valid_token() {
    let app = spawn_app().await;

    let (status, _) = get(&app, "/auth/profile").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get_with_token(&app, "/auth/profile", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_favorites() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/products/favorites").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["data"].as_array().unwrap();
    assert!(items.len() <= 3);
    assert!(!items.is_empty());
    for item in items {
        assert_eq!(item["category"], "coffee");
        assert!(item.get("sizes").is_none());
        assert!(item.get("additives").is_none());
    }
}

#[tokio::test]
async fn test_product_listing_and_detail() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len() as u64, FIXTURE_PRODUCT_COUNT);

    for item in items {
        assert!(item.get("sizes").is_none());

        let id = item["id"].as_i64().unwrap();
        let (status, detail) = get(&app, &format!("/products/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["data"]["id"], item["id"]);
        assert_eq!(detail["data"]["name"], item["name"]);
        assert!(detail["data"]["sizes"].is_object());
        assert!(detail["data"]["additives"].is_array());
    }
}

#[tokio::test]
async fn test_products_by_category() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/products?category=tea").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert!(!items.is_empty());
    for item in items {
        assert_eq!(item["category"], "tea");
    }
}

#[tokio::test]
async fn test_product_not_found_and_bad_ids() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/products/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Product with ID 9999 not found");

    let (status, _) = get(&app, "/products/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/products/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_confirmation() {
    let app = spawn_app().await;

    let order = json!({
        "items": [
            {"productId": 1, "size": "m", "additives": ["Cinnamon"], "quantity": 2}
        ],
        "totalPrice": 15.00,
    });

    let (status, first) = post_json(&app, "/orders/confirm", &order, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["data"]["message"], "Your order is confirmed");

    let (status, second) = post_json(&app, "/orders/confirm", &order, None).await;
    assert_eq!(status, StatusCode::CREATED);

    let first_id = first["data"]["orderId"].as_str().unwrap();
    let second_id = second["data"]["orderId"].as_str().unwrap();
    assert_ne!(first_id, second_id);
    assert!(uuid::Uuid::parse_str(first_id).is_ok());

    // Empty carts are still acknowledged.
    let (status, _) = post_json(
        &app,
        "/orders/confirm",
        &json!({"items": [], "totalPrice": 0.0}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_order_validation() {
    let app = spawn_app().await;

    let zero_quantity = json!({
        "items": [{"productId": 1, "size": "s", "quantity": 0}],
        "totalPrice": 5.0,
    });
    let (status, _) = post_json(&app, "/orders/confirm", &zero_quantity, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let negative_total = json!({"items": [], "totalPrice": -1.0});
    let (status, _) = post_json(&app, "/orders/confirm", &negative_total, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let extra_field = json!({"items": [], "totalPrice": 0.0, "coupon": "FREE"});
    let (status, _) = post_json(&app, "/orders/confirm", &extra_field, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_optional_auth() {
    let app = spawn_app().await;

    let order = json!({"items": [], "totalPrice": 0.0});

    // Garbage token never blocks the optional-auth endpoint.
    let (status, _) = post_json(&app, "/orders/confirm", &order, Some("garbage")).await;
    assert_eq!(status, StatusCode::CREATED);

    // The strict variant rejects missing and invalid tokens.
    let (status, _) = post_json(&app, "/orders/confirm-auth", &order, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post_json(&app, "/orders/confirm-auth", &order, Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, registered) = post_json(&app, "/auth/register", &register_body("grace"), None).await;
    let token = registered["data"]["access_token"].as_str().unwrap();

    let (status, body) = post_json(&app, "/orders/confirm-auth", &order, Some(token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["message"], "Your order is confirmed");
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let state = spawn_state().await;

    // A second run must not duplicate the catalog.
    SeedService::new(Arc::clone(&state.products), "data/products.json")
        .run()
        .await
        .expect("Second seed run failed");

    let count = state.products.count().await.unwrap();
    assert_eq!(count, FIXTURE_PRODUCT_COUNT);
}
