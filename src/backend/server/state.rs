/**
 * Application State Management
 *
 * `AppState` is the state handed to every handler. It holds only immutable
 * configuration and the upstream client; nothing in it is written after
 * startup, so concurrent requests share no mutable state.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(upstream): State<UpstreamClient>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::upstream::UpstreamClient;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Validated configuration
    pub config: Arc<AppConfig>,

    /// Client for the project and task services
    ///
    /// Clones share one connection pool.
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: AppConfig, upstream: UpstreamClient) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}

impl FromRef<AppState> for UpstreamClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.upstream.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
