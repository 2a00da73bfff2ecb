//! Integration tests for the addition service.

use addition::create_router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};

/// Helper to make a GET request against a fresh router.
async fn get(uri: &str) -> (StatusCode, Value) {
    let response = tower::ServiceExt::oneshot(
        create_router(),
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_returns_bare_difference() {
    let (status, body) = get("/?first_number=10&second_number=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(7));
}

#[tokio::test]
async fn test_negative_result() {
    let (status, body) = get("/?first_number=5&second_number=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(-5));
}

#[tokio::test]
async fn test_negative_operands() {
    let (status, body) = get("/?first_number=-10&second_number=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(-5));
}

#[tokio::test]
async fn test_default_values() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(0));
}

#[tokio::test]
async fn test_single_parameter_defaults_other() {
    let (status, body) = get("/?first_number=9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(9));
}

#[tokio::test]
async fn test_extreme_operands_do_not_overflow() {
    let uri = format!(
        "/?first_number={}&second_number={}",
        i64::MAX,
        i64::MIN
    );
    let (status, body) = get(&uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(u64::MAX));
}

#[tokio::test]
async fn test_non_integer_is_422() {
    let (status, body) = get("/?first_number=7.5&second_number=2").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_non_numeric_is_422() {
    let (status, _) = get("/?first_number=abc").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
