/**
 * Server Initialization
 *
 * Builds the Axum application from a validated configuration.
 *
 * # Initialization Process
 *
 * 1. Build the upstream client with the configured timeout
 * 2. Create the shared application state
 * 3. Create the router with all routes and middleware
 *
 * Binding the listener and serving are left to the caller (see
 * `src/backend/main.rs`), so tests can drive the same router in memory.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::backend::upstream::UpstreamClient;
use crate::shared::{AppConfig, ConfigError};

/// Create and configure the Axum application
///
/// # Errors
///
/// * `ConfigError::HttpClient` - If the upstream HTTP client cannot be built
pub fn create_app(config: &AppConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing reports service");

    let upstream = UpstreamClient::new(config.upstream.clone())?;
    tracing::info!(
        project_service = %upstream.config().project_service_url,
        task_service = %upstream.config().task_service_url,
        timeout_secs = upstream.config().timeout.as_secs_f64(),
        "Upstream client configured"
    );

    let app_state = AppState::new(config.clone(), upstream);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
