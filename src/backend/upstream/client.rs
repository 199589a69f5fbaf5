/**
 * Upstream Client
 *
 * HTTP client for the two services this one reads from:
 *
 * - `GET {project_service_url}/projects` - every project
 * - `GET {task_service_url}/tasks` - every task
 *
 * Both requests forward the caller's bearer token. There is no retry and no
 * caching: each report request fetches both collections once, and any
 * failure ends the request. Every request is bounded by the configured
 * timeout, and a timeout counts as a fetch failure. Response bodies larger
 * than the configured limit are refused without being read to the end.
 */

use std::sync::Arc;

use reqwest::{header::AUTHORIZATION, Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::backend::error::ReportError;
use crate::backend::upstream::token::BearerToken;
use crate::shared::{decode_records, ConfigError, Project, Task, UpstreamConfig};

/// The collections this service reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Projects,
    Tasks,
}

impl Collection {
    /// Name of the owning service, used in errors and logs
    pub fn service(self) -> &'static str {
        match self {
            Self::Projects => "project",
            Self::Tasks => "task",
        }
    }

    /// Collection name as served upstream
    pub fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Tasks => "tasks",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Projects => "/projects",
            Self::Tasks => "/tasks",
        }
    }
}

/// Error body shape used by the workboard services
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the project and task services
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: Arc<UpstreamConfig>,
}

impl UpstreamClient {
    /// Create a client for the given upstream locations
    ///
    /// # Errors
    ///
    /// * `ConfigError::HttpClient` - If the underlying HTTP client cannot be built
    pub fn new(config: UpstreamConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Full URL of a collection
    pub fn url(&self, collection: Collection) -> String {
        let base = match collection {
            Collection::Projects => &self.config.project_service_url,
            Collection::Tasks => &self.config.task_service_url,
        };
        format!("{}{}", base, collection.path())
    }

    /// Fetch every project
    pub async fn fetch_projects(&self, token: &BearerToken) -> Result<Vec<Project>, ReportError> {
        self.fetch_collection(Collection::Projects, token).await
    }

    /// Fetch every task
    pub async fn fetch_tasks(&self, token: &BearerToken) -> Result<Vec<Task>, ReportError> {
        self.fetch_collection(Collection::Tasks, token).await
    }

    /// Fetch projects and tasks concurrently
    ///
    /// Resolves once both collections are in, or with the first error. A
    /// failure of either fetch drops the other one.
    pub async fn fetch_all(
        &self,
        token: &BearerToken,
    ) -> Result<(Vec<Project>, Vec<Task>), ReportError> {
        tokio::try_join!(self.fetch_projects(token), self.fetch_tasks(token))
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
        token: &BearerToken,
    ) -> Result<Vec<T>, ReportError> {
        let service = collection.service();
        let url = self.url(collection);
        debug!(%url, "Fetching {} collection", service);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, token.header_value())
            .send()
            .await
            .map_err(|e| transport_error(service, e))?;

        let status = response.status();
        let body = read_body(service, response, self.config.max_body_bytes).await?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            warn!(%url, status = status.as_u16(), "Upstream {} service rejected request", service);
            return Err(ReportError::upstream(service, Some(status.as_u16()), message));
        }

        let records: Vec<T> = decode_records(collection.name(), &body)
            .map_err(|e| ReportError::malformed_payload(service, e))?;

        debug!(%url, count = records.len(), "Fetched {} collection", service);
        Ok(records)
    }
}

/// Read a response body, refusing anything larger than `limit` bytes
async fn read_body(
    service: &'static str,
    mut response: Response,
    limit: usize,
) -> Result<Vec<u8>, ReportError> {
    let status = response.status().as_u16();
    let too_large = || {
        warn!(status, limit, "Upstream {} service response too large", service);
        ReportError::upstream(
            service,
            Some(status),
            format!("{} service response exceeds {} bytes", service, limit),
        )
    };

    if response.content_length().is_some_and(|len| len > limit as u64) {
        return Err(too_large());
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| transport_error(service, e))?
    {
        if body.len() + chunk.len() > limit {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn transport_error(service: &'static str, err: reqwest::Error) -> ReportError {
    let message = if err.is_timeout() {
        format!("{} service timed out", service)
    } else if err.is_connect() {
        format!("{} service unreachable: {}", service, err)
    } else {
        err.to_string()
    };
    warn!(error = %err, "Upstream {} service request failed", service);
    ReportError::upstream(service, err.status().map(|s| s.as_u16()), message)
}

/// The `message` field of an upstream error body, if it has one
fn upstream_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<UpstreamErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.is_empty())
}
