//! Tests for writing error envelopes as HTTP responses.

use axum::body::to_bytes;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use svckit_error::ServiceError;
use svckit_error::constants::CONTENT_TYPE;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_response_carries_status_and_content_type() {
    let err = ServiceError::new("orders.NOT_FOUND", "Not Found", "no order 42", 404);
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        CONTENT_TYPE
    );

    let body = body_json(response).await;
    assert_eq!(body["code"], "orders.NOT_FOUND");
    assert_eq!(body["httpCode"], 404);
    assert_eq!(body["httpError"], "Not Found");
}

#[tokio::test]
async fn test_wrapped_error_is_sent_as_500() {
    let cause = std::io::Error::other("database unreachable");
    let response = ServiceError::wrap(&cause, &["orders"]).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["code"], "orders.INTERNAL_ERROR");
    assert_eq!(body["title"], "Internal Error in Microservice");
    assert_eq!(body["description"], "database unreachable");
    assert_eq!(body["httpError"], "Internal Server Error");
}

#[tokio::test]
async fn test_invalid_status_code_falls_back_to_500() {
    let err = ServiceError::new("orders.WEIRD", "Weird", "", 42);
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The body still reports what the envelope said
    let body = body_json(response).await;
    assert_eq!(body["httpCode"], 42);
    assert_eq!(body["httpError"], "");
}

#[tokio::test]
async fn test_unknown_but_valid_status_code_is_sent_as_is() {
    let err = ServiceError::new("orders.CUSTOM", "Custom", "", 599);
    let response = err.into_response();

    assert_eq!(response.status().as_u16(), 599);
}

#[test]
fn test_envelope_round_trips_through_json() {
    let json = r#"{"code":"a.B","title":"t","description":"d","httpCode":409,"httpError":"Conflict"}"#;
    let err: ServiceError = serde_json::from_str(json).unwrap();

    assert_eq!(err.http_status_code, 409);
    assert_eq!(err, ServiceError::new("a.B", "t", "d", 409));
}
