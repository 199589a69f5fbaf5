//! Application configuration module
//!
//! Provides configuration types for the reports service. Values are injected
//! into the components that need them at construction time; nothing below
//! reads process state on its own. Loading from the environment lives in
//! `backend::server::config`.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3004;
pub const DEFAULT_PROJECT_SERVICE_URL: &str = "http://localhost:3003";
pub const DEFAULT_TASK_SERVICE_URL: &str = "http://localhost:3005";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_UPSTREAM_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Locations and limits of the upstream services
    pub upstream: UpstreamConfig,
    /// Secret shared with the auth service for verifying bearer tokens
    pub jwt_secret: String,
}

/// Where the project and task services live and how long to wait for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL of the project service, without trailing slash
    pub project_service_url: String,
    /// Base URL of the task service, without trailing slash
    pub task_service_url: String,
    /// Bound applied to every upstream request
    pub timeout: Duration,
    /// Largest upstream response body accepted, in bytes
    pub max_body_bytes: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            project_service_url: DEFAULT_PROJECT_SERVICE_URL.to_string(),
            task_service_url: DEFAULT_TASK_SERVICE_URL.to_string(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
            max_body_bytes: DEFAULT_UPSTREAM_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("PROJECT_SERVICE_URL", &self.upstream.project_service_url)?;
        validate_url("TASK_SERVICE_URL", &self.upstream.task_service_url)?;

        if self.upstream.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "REPORTS_UPSTREAM_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        if self.upstream.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REPORTS_UPSTREAM_MAX_BODY_BYTES",
                value: "0".to_string(),
            });
        }
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }

        Ok(())
    }
}

// The secret stays out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("upstream", &self.upstream)
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

fn validate_url(key: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(format!("{key}={url}")))
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    project_service_url: Option<String>,
    task_service_url: Option<String>,
    upstream_timeout: Option<Duration>,
    upstream_max_body_bytes: Option<usize>,
    jwt_secret: Option<String>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the project service base URL
    pub fn project_service_url(mut self, url: impl Into<String>) -> Self {
        self.project_service_url = Some(url.into());
        self
    }

    /// Set the task service base URL
    pub fn task_service_url(mut self, url: impl Into<String>) -> Self {
        self.task_service_url = Some(url.into());
        self
    }

    /// Set the per-request upstream timeout
    pub fn upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = Some(timeout);
        self
    }

    /// Set the largest accepted upstream response body
    pub fn upstream_max_body_bytes(mut self, limit: usize) -> Self {
        self.upstream_max_body_bytes = Some(limit);
        self
    }

    /// Set the token verification secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = UpstreamConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            upstream: UpstreamConfig {
                project_service_url: trim_base_url(
                    self.project_service_url
                        .unwrap_or(defaults.project_service_url),
                ),
                task_service_url: trim_base_url(
                    self.task_service_url.unwrap_or(defaults.task_service_url),
                ),
                timeout: self.upstream_timeout.unwrap_or(defaults.timeout),
                max_body_bytes: self
                    .upstream_max_body_bytes
                    .unwrap_or(defaults.max_body_bytes),
            },
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
        };

        config.validate()?;
        Ok(config)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
