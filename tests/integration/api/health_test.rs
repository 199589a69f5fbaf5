//! Health and fallback route tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::MockUpstreams;

#[tokio::test]
async fn test_health_needs_no_token() {
    let upstreams = MockUpstreams::start().await;
    let server = upstreams.test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let upstreams = MockUpstreams::start().await;
    let server = upstreams.test_server();

    let response = server.get("/reports/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["status"], 404);
}
