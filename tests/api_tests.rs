//! Tests end-to-end de la API de valuación
//!
//! Ejercitan el router real con una tendencia de mercado fija para que
//! los resultados sean deterministas.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Datelike;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use car_valuation::config::environment::EnvironmentConfig;
use car_valuation::create_app;
use car_valuation::services::market_trend::FixedMarketTrend;
use car_valuation::state::AppState;

fn test_app(trend: f64) -> Router {
    let config = EnvironmentConfig {
        environment: "development".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_origins: vec![],
        analysis_delay_ms: 0,
    };
    create_app(AppState::new(config, Arc::new(FixedMarketTrend(trend))))
}

fn estimate_body(make: &str, year: i32) -> Value {
    json!({
        "make": make,
        "model": "Test",
        "year": year,
        "mileage": 0,
        "fuelType": "Gasoline",
        "transmission": "Automatic",
        "engineSize": 2.0,
        "condition": "Excellent",
        "accidents": "No Accidents",
        "owners": 1,
        "location": "Urban"
    })
}

async fn post_estimate(app: Router, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/valuation/estimate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app(0.0)
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_estimate_new_excellent_toyota() {
    let current_year = chrono::Utc::now().year();
    let (status, body) = post_estimate(test_app(0.0), &estimate_body("Toyota", current_year)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let prediction = &body["data"]["prediction"];
    assert_eq!(prediction["predictedPrice"], 31625);
    assert_eq!(prediction["confidence"], 85);
    assert_eq!(prediction["factors"]["depreciation"], 0.0);
    assert_eq!(prediction["factors"]["condition"], 15.0);
    assert_eq!(prediction["factors"]["market"], 0.0);

    let display = &body["data"]["display"];
    assert_eq!(display["predictedPrice"], "$31,625");
    assert_eq!(display["factors"]["condition"], "+15%");
}

#[tokio::test]
async fn test_estimate_unknown_make_is_neutral() {
    let current_year = chrono::Utc::now().year();
    let mut body = estimate_body("Tesla", current_year);
    body["condition"] = json!("Good");

    let (status, response) = post_estimate(test_app(0.0), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["prediction"]["predictedPrice"], 25000);
}

#[tokio::test]
async fn test_estimate_price_range_contains_price() {
    let current_year = chrono::Utc::now().year();
    let mut body = estimate_body("BMW", current_year - 4);
    body["mileage"] = json!(60_000);
    body["owners"] = json!(3);

    let (status, response) = post_estimate(test_app(-3.5), &body).await;
    assert_eq!(status, StatusCode::OK);

    let prediction = &response["data"]["prediction"];
    let price = prediction["predictedPrice"].as_i64().unwrap();
    let min = prediction["priceRange"]["min"].as_i64().unwrap();
    let max = prediction["priceRange"]["max"].as_i64().unwrap();
    assert!(min <= price && price <= max);

    let confidence = prediction["confidence"].as_i64().unwrap();
    assert!((65..=95).contains(&confidence));
}

#[tokio::test]
async fn test_estimate_rejects_future_year() {
    let next_year = chrono::Utc::now().year() + 1;
    let (status, body) = post_estimate(test_app(0.0), &estimate_body("Toyota", next_year)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_estimate_rejects_out_of_range_fields() {
    let current_year = chrono::Utc::now().year();
    let mut body = estimate_body("Toyota", current_year);
    body["mileage"] = json!(-100);
    body["owners"] = json!(15);

    let (status, response) = post_estimate(test_app(0.0), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_estimate_rejects_unknown_enum_value() {
    let current_year = chrono::Utc::now().year();
    let mut body = estimate_body("Toyota", current_year);
    body["fuelType"] = json!("Steam");

    // serde rechaza el enum en deserialización y el handler lo mapea a 400
    let (status, response) = post_estimate(test_app(0.0), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_estimate_rejects_malformed_body() {
    let response = test_app(0.0)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/valuation/estimate")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let response = test_app(0.0)
        .oneshot(
            Request::builder()
                .uri("/api/valuation/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_form_options_endpoint() {
    let response = test_app(0.0)
        .oneshot(
            Request::builder()
                .uri("/api/valuation/options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["makes"].as_array().unwrap().len(), 10);
    assert!(body["conditions"]
        .as_array()
        .unwrap()
        .contains(&json!("Very Good")));
    assert!(body["accidentHistory"]
        .as_array()
        .unwrap()
        .contains(&json!("No Accidents")));
}

#[tokio::test]
async fn test_same_input_and_trend_reproducible() {
    let current_year = chrono::Utc::now().year();
    let body = estimate_body("Honda", current_year - 2);

    let (_, a) = post_estimate(test_app(1.5), &body).await;
    let (_, b) = post_estimate(test_app(1.5), &body).await;

    assert_eq!(a["data"]["prediction"], b["data"]["prediction"]);
}
