/**
 * Report Routes
 *
 * Mounts the report handlers under `/reports`, all behind the auth
 * middleware.
 *
 * # Routes
 *
 * - `GET /reports/project-progress`
 * - `GET /reports/user-workload`
 * - `GET /reports/task-priority-distribution`
 * - `GET /reports/task-user-distribution`
 */

use axum::{middleware, routing::get, Router};

use crate::backend::middleware::auth_middleware;
use crate::backend::reports::{
    get_project_progress, get_task_priority_distribution, get_task_user_distribution,
    get_user_workload,
};
use crate::backend::server::state::AppState;

/// Configure report routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State the auth middleware reads the token secret from
///
/// # Authentication
///
/// Every route requires a JWT in the `Authorization` header. Any role is
/// accepted.
pub fn configure_report_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let reports = Router::new()
        .route("/project-progress", get(get_project_progress))
        .route("/user-workload", get(get_user_workload))
        .route(
            "/task-priority-distribution",
            get(get_task_priority_distribution),
        )
        .route("/task-user-distribution", get(get_task_user_distribution))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router.nest("/reports", reports)
}
