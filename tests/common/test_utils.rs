use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, Response, StatusCode},
};
use prompt_relay::{
    detection::DetectionClient,
    server::{self, cors, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_BASE_URL: &str = "http://detector.test";

/// Build the relay router around the given detection client
pub fn create_test_app(base_url: Option<&str>, detector: Arc<dyn DetectionClient>) -> Router {
    server::router(AppState::new(base_url.map(str::to_string), detector))
}

pub fn detect_request(method: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/detect")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Send one request through the router and collect status, headers and body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response: Response<Body> = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

pub fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is not JSON")
}

pub fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], cors::ALLOW_ORIGIN);
    assert_eq!(headers["access-control-allow-methods"], cors::ALLOW_METHODS);
    assert_eq!(headers["access-control-allow-headers"], cors::ALLOW_HEADERS);
}
