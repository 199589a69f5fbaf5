//! Mock upstream helpers for integration tests
//!
//! Starts one `wiremock` server per upstream service and wires a reports
//! app to them.

use std::time::Duration;

use axum_test::TestServer;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workboard_reports::backend::server::create_app;
use workboard_reports::shared::{AppConfig, UpstreamConfig};

use super::auth_helpers::TEST_SECRET;

/// Mock project and task services
pub struct MockUpstreams {
    pub projects: MockServer,
    pub tasks: MockServer,
}

impl MockUpstreams {
    pub async fn start() -> Self {
        Self {
            projects: MockServer::start().await,
            tasks: MockServer::start().await,
        }
    }

    /// Upstream locations pointing at the mocks
    pub fn upstream_config(&self, timeout: Duration) -> UpstreamConfig {
        UpstreamConfig {
            project_service_url: self.projects.uri(),
            task_service_url: self.tasks.uri(),
            timeout,
            ..UpstreamConfig::default()
        }
    }

    /// Full app configuration pointing at the mocks
    pub fn app_config(&self) -> AppConfig {
        AppConfig::builder()
            .project_service_url(self.projects.uri())
            .task_service_url(self.tasks.uri())
            .upstream_timeout(Duration::from_secs(2))
            .jwt_secret(TEST_SECRET)
            .build()
            .expect("valid test config")
    }

    /// Serve `/projects`, expecting exactly one call carrying `token`
    pub async fn serve_projects(&self, token: &str, body: Value) {
        mount_collection(&self.projects, "/projects", token, ResponseTemplate::new(200).set_body_json(body), 1).await;
    }

    /// Serve `/tasks`, expecting exactly one call carrying `token`
    pub async fn serve_tasks(&self, token: &str, body: Value) {
        mount_collection(&self.tasks, "/tasks", token, ResponseTemplate::new(200).set_body_json(body), 1).await;
    }

    /// Answer `/projects` with an arbitrary response, any number of times
    pub async fn respond_projects(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(response)
            .mount(&self.projects)
            .await;
    }

    /// Answer `/tasks` with an arbitrary response, any number of times
    pub async fn respond_tasks(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(response)
            .mount(&self.tasks)
            .await;
    }

    /// A reports app wired to the mocks
    pub fn test_server(&self) -> TestServer {
        let app = create_app(&self.app_config()).expect("Failed to create app");
        TestServer::new(app).expect("Failed to start test server")
    }
}

async fn mount_collection(
    server: &MockServer,
    collection: &str,
    token: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(collection))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}
