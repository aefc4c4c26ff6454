//! HTTP API tests
//!
//! Drive the router with `tower::ServiceExt::oneshot` against in-memory stores.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use macrocalc::db::{migrations, Database};
use macrocalc::http::{router, AppState};
use macrocalc::models::{FoodRecord, MacroResponse};
use macrocalc::store::{FoodStore, MemoryFoodStore, SqliteFoodStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn catalog() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("Egg, whole, boiled or poached")
            .with_nutrient("208", 155.0)
            .with_nutrient("203", 13.0)
            .with_nutrient("204", 11.0)
            .with_nutrient("205", 1.1)
            .with_portion("1 egg", 50.0),
        FoodRecord::new("Banana, raw")
            .with_nutrient("208", 89.0)
            .with_portion("1 cup, sliced", 150.0),
    ]
}

fn app(store: Arc<dyn FoodStore>) -> axum::Router {
    router(AppState::new(store, PathBuf::from("unused.db")))
}

async fn send(app: axum::Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to execute request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_json(app: axum::Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/v1/calculate-macros", Body::from(body.to_string())).await
}

fn approx(actual: &Value, expected: f64) {
    let actual = actual.as_f64().expect("number");
    assert!((actual - expected).abs() < 0.001, "expected {expected}, got {actual}");
}

#[tokio::test]
async fn test_calculate_macros_mixed_batch() {
    let store = Arc::new(MemoryFoodStore::new(catalog()));
    let (status, body) = post_json(
        app(store.clone()),
        json!({
            "data": {
                "frame_id": "frame-7",
                "volumes": [
                    {"object_name": "egg", "volume_cups": 2.0, "uncertainty_cups": 0.2},
                    {"object_name": "tofu", "volume_cups": 1.0, "uncertainty_cups": 0.1},
                    {"object_name": "banana", "volume_cups": 1.5, "uncertainty_cups": 0.1}
                ]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 3);

    assert_eq!(data[0]["found"], json!(true));
    assert_eq!(data[0]["requested_food"], json!("egg"));
    approx(&data[0]["calculated_weight"], 450.0);
    approx(&data[0]["macros"]["calories"], 697.5);
    approx(&data[0]["macros"]["protein"], 58.5);
    approx(&data[0]["macros"]["fat"], 49.5);
    approx(&data[0]["macros"]["carbs"], 4.95);

    assert_eq!(
        data[1],
        json!({"found": false, "requested_food": "tofu", "requested_volume": 1.0})
    );

    approx(&data[2]["calculated_weight"], 225.0);
    approx(&data[2]["macros"]["calories"], 200.25);

    // "tofu" never reaches the store
    assert_eq!(store.query_count(), 2);
}

#[tokio::test]
async fn test_calculate_macros_with_sqlite_store() {
    let database = Database::in_memory().unwrap();
    database.with_conn(migrations::run_migrations).unwrap();
    let store = SqliteFoodStore::new(database);
    store.import_records(&catalog()).unwrap();

    let (status, body) = post_json(
        app(Arc::new(store)),
        json!({"data": {"volumes": [{"object_name": "banana", "volume_cups": 1.0}]}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: MacroResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.data.len(), 1);
    assert!(response.data[0].found);
    assert_eq!(response.data[0].calculated_weight, Some(150.0));
}

#[tokio::test]
async fn test_store_outage_returns_not_found_items() {
    let (status, body) = post_json(
        app(Arc::new(MemoryFoodStore::failing("connection refused"))),
        json!({"data": {"volumes": [{"object_name": "egg", "volume_cups": 1.0}]}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": [{"found": false, "requested_food": "egg", "requested_volume": 1.0}]})
    );
}

#[tokio::test]
async fn test_empty_volumes() {
    let (status, body) = post_json(
        app(Arc::new(MemoryFoodStore::new(catalog()))),
        json!({"data": {"frame_id": "frame-8"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, body) = send(
        app(Arc::new(MemoryFoodStore::new(catalog()))),
        Method::POST,
        "/v1/calculate-macros",
        Body::from("{\"data\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_volume_is_bad_request() {
    let (status, body) = post_json(
        app(Arc::new(MemoryFoodStore::new(catalog()))),
        json!({"data": {"volumes": [{"object_name": "egg"}]}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_status_endpoint() {
    let (status, body) = send(
        app(Arc::new(MemoryFoodStore::new(catalog()))),
        Method::GET,
        "/v1/status",
        Body::empty(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["food_records"], json!(2));
    assert_eq!(body["recognized_foods"], json!(["egg", "rice", "banana"]));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}
