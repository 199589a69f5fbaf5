/**
 * Router Configuration
 *
 * Combines all routes into a single Axum router and applies the layers
 * shared by every route.
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per request
 * - `CorsLayer` - cross-origin access for browser clients
 */

use std::time::Duration;

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::routes::report_routes::configure_report_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /health` - Liveness check, no authentication
/// - `GET /reports/*` - Report endpoints, see `report_routes`
///
/// Unknown routes fall back to a JSON 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_report_routes(router, app_state.clone());

    let router = router.fallback(not_found);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(app_state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not Found", "status": 404 })),
    )
}
