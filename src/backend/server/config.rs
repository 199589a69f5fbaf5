/**
 * Server Configuration
 *
 * Loads `AppConfig` from environment variables. The binary loads a `.env`
 * file first, so either source works.
 *
 * | Variable | Default |
 * |---|---|
 * | `PORT` | `3004` |
 * | `PROJECT_SERVICE_URL` | `http://localhost:3003` |
 * | `TASK_SERVICE_URL` | `http://localhost:3005` |
 * | `REPORTS_UPSTREAM_TIMEOUT_SECS` | `10` |
 * | `REPORTS_UPSTREAM_MAX_BODY_BYTES` | `16777216` |
 * | `JWT_SECRET` | none, required |
 */

use std::str::FromStr;
use std::time::Duration;

use crate::shared::config::{
    AppConfig, ConfigError, DEFAULT_PORT, DEFAULT_PROJECT_SERVICE_URL, DEFAULT_TASK_SERVICE_URL,
    DEFAULT_UPSTREAM_MAX_BODY_BYTES, DEFAULT_UPSTREAM_TIMEOUT,
};

pub const PORT: &str = "PORT";
pub const PROJECT_SERVICE_URL: &str = "PROJECT_SERVICE_URL";
pub const TASK_SERVICE_URL: &str = "TASK_SERVICE_URL";
pub const UPSTREAM_TIMEOUT_SECS: &str = "REPORTS_UPSTREAM_TIMEOUT_SECS";
pub const UPSTREAM_MAX_BODY_BYTES: &str = "REPORTS_UPSTREAM_MAX_BODY_BYTES";
pub const JWT_SECRET: &str = "JWT_SECRET";

/// Load configuration from the process environment
///
/// # Errors
///
/// * `ConfigError::MissingValue` - If `JWT_SECRET` is not set
/// * `ConfigError::InvalidValue` - If a numeric variable does not parse
/// * `ConfigError::InvalidUrl` - If a service URL is not http(s)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let port: u16 = parse_or(&lookup, PORT, DEFAULT_PORT)?;
    let timeout_secs: u64 = parse_or(&lookup, UPSTREAM_TIMEOUT_SECS, DEFAULT_UPSTREAM_TIMEOUT.as_secs())?;
    let max_body_bytes: usize =
        parse_or(&lookup, UPSTREAM_MAX_BODY_BYTES, DEFAULT_UPSTREAM_MAX_BODY_BYTES)?;

    let mut builder = AppConfig::builder()
        .port(port)
        .project_service_url(string_or(&lookup, PROJECT_SERVICE_URL, DEFAULT_PROJECT_SERVICE_URL))
        .task_service_url(string_or(&lookup, TASK_SERVICE_URL, DEFAULT_TASK_SERVICE_URL))
        .upstream_timeout(Duration::from_secs(timeout_secs))
        .upstream_max_body_bytes(max_body_bytes);

    if let Some(secret) = lookup(JWT_SECRET) {
        builder = builder.jwt_secret(secret);
    } else {
        tracing::error!("{} not set; bearer tokens cannot be verified", JWT_SECRET);
    }

    let config = builder.build()?;
    tracing::info!(?config, "Configuration loaded");
    Ok(config)
}

fn string_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        tracing::info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| {
            tracing::warn!("Invalid {} value: {}", key, value);
            ConfigError::InvalidValue { key, value }
        }),
        None => Ok(default),
    }
}
