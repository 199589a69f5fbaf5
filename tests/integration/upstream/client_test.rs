//! Upstream client tests
//!
//! Exercise `UpstreamClient` directly against mock services.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::ResponseTemplate;
use workboard_reports::backend::upstream::{BearerToken, UpstreamClient};
use workboard_reports::backend::ReportError;
use workboard_reports::shared::{TaskPriority, TaskStatus};

use crate::common::{sample_projects, sample_tasks, MockUpstreams};

fn client(upstreams: &MockUpstreams, timeout: Duration) -> UpstreamClient {
    UpstreamClient::new(upstreams.upstream_config(timeout)).expect("Failed to build client")
}

#[tokio::test]
async fn test_fetch_all_forwards_token_to_both_services() {
    let upstreams = MockUpstreams::start().await;
    upstreams.serve_projects("abc.def.ghi", sample_projects()).await;
    upstreams.serve_tasks("abc.def.ghi", sample_tasks()).await;

    // The scheme is added back exactly once.
    let token = BearerToken::parse("Bearer abc.def.ghi").unwrap();
    let (projects, tasks) = client(&upstreams, Duration::from_secs(2))
        .fetch_all(&token)
        .await
        .unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, 10);
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[0].status, TaskStatus::Done);
    assert_eq!(tasks[0].priority, TaskPriority::High);
    assert_eq!(tasks[3].project_id, 99);
    assert_eq!(tasks[3].assigned_to.name.as_deref(), Some("Robert"));
}

#[tokio::test]
async fn test_timeout_is_a_fetch_error() {
    let upstreams = MockUpstreams::start().await;
    upstreams
        .respond_tasks(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .await;

    let token = BearerToken::parse("abc").unwrap();
    let result = client(&upstreams, Duration::from_millis(100))
        .fetch_tasks(&token)
        .await;

    match result {
        Err(ReportError::UpstreamFetch { service, status, message }) => {
            assert_eq!(service, "task");
            assert_eq!(status, None);
            assert_eq!(message, "task service timed out");
        }
        other => panic!("Expected UpstreamFetch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_a_fetch_error() {
    let upstreams = MockUpstreams::start().await;
    let mut config = upstreams.upstream_config(Duration::from_secs(2));
    // Nothing listens on the discard port.
    config.project_service_url = "http://127.0.0.1:9".to_string();
    let client = UpstreamClient::new(config).unwrap();

    let token = BearerToken::parse("abc").unwrap();
    let error = client.fetch_projects(&token).await.unwrap_err();

    assert!(matches!(
        error,
        ReportError::UpstreamFetch { service: "project", status: None, .. }
    ));
}

#[tokio::test]
async fn test_upstream_status_is_recorded() {
    let upstreams = MockUpstreams::start().await;
    upstreams
        .respond_projects(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid token"})),
        )
        .await;

    let token = BearerToken::parse("abc").unwrap();
    let error = client(&upstreams, Duration::from_secs(2))
        .fetch_projects(&token)
        .await
        .unwrap_err();

    match error {
        ReportError::UpstreamFetch { service, status, message } => {
            assert_eq!(service, "project");
            assert_eq!(status, Some(401));
            assert_eq!(message, "Invalid token");
        }
        other => panic!("Expected UpstreamFetch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oversized_body_is_refused() {
    let upstreams = MockUpstreams::start().await;
    upstreams
        .respond_tasks(ResponseTemplate::new(200).set_body_json(sample_tasks()))
        .await;
    let mut config = upstreams.upstream_config(Duration::from_secs(2));
    config.max_body_bytes = 64;
    let client = UpstreamClient::new(config).unwrap();

    let token = BearerToken::parse("abc").unwrap();
    let error = client.fetch_tasks(&token).await.unwrap_err();

    match error {
        ReportError::UpstreamFetch { service, status, message } => {
            assert_eq!(service, "task");
            assert_eq!(status, Some(200));
            assert_eq!(message, "task service response exceeds 64 bytes");
        }
        other => panic!("Expected UpstreamFetch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_body_within_limit_is_accepted() {
    let upstreams = MockUpstreams::start().await;
    upstreams
        .respond_projects(ResponseTemplate::new(200).set_body_json(json!([{"_id": 1}])))
        .await;
    let mut config = upstreams.upstream_config(Duration::from_secs(2));
    config.max_body_bytes = 64;
    let client = UpstreamClient::new(config).unwrap();

    let token = BearerToken::parse("abc").unwrap();
    let projects = client.fetch_projects(&token).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, 1);
}
