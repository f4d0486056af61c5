//! Router-level tests driven through `tower::ServiceExt`
//!
//! These exercise the HTTP plumbing without a network: the weather
//! client is constructed without an API key, so only routes that stop
//! before a provider call (or fail all lookups) are covered here.

use std::sync::Arc;

use askweather::api;
use askweather::config::AskWeatherConfig;
use askweather::weather::WeatherClient;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router() -> Router {
    let client = WeatherClient::new(&AskWeatherConfig::default()).unwrap();
    api::router(Arc::new(client))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn extract_happy_path() {
    let response = test_router()
        .oneshot(post_json(
            "/extract",
            json!({ "text": "weather in Chennai and Madurai now" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["metric"], "temperature");
    assert_eq!(body["time"], "now");
    assert_eq!(body["locations"], json!(["chennai", "madurai"]));
    assert_eq!(body["raw_text"], "weather in Chennai and Madurai now");
}

#[tokio::test]
async fn extract_rejects_empty_text() {
    let response = test_router()
        .oneshot(post_json("/extract", json!({ "text": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid query"));
}

#[tokio::test]
async fn ask_without_location_is_bad_request() {
    let response = test_router()
        .oneshot(post_json("/ask", json!({ "text": "what is the wind speed now" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("No location"));
}

#[tokio::test]
async fn ask_without_api_key_reports_lookup_failures() {
    let response = test_router()
        .oneshot(post_json("/ask", json!({ "text": "weather in Chennai" })))
        .await
        .unwrap();

    // Every lookup fails on the missing credential; the request is
    // answered with the per-location failures rather than a panic.
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["failures"][0]["location"], "chennai");
    assert!(
        body["failures"][0]["error"]
            .as_str()
            .unwrap()
            .contains("API key")
    );
}

#[tokio::test]
async fn get_metric_rejects_unknown_metric() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/metric?metric=visibility&location=chennai")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("visibility"));
}

#[tokio::test]
async fn get_metric_requires_location() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/metric?metric=temperature")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_metric_rejects_location_that_sanitizes_to_nothing() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/metric?metric=temperature&location=now")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
