/**
 * Report Handlers
 *
 * One handler per report. Each runs behind the auth middleware, fetches
 * both upstream collections with the caller's token, and hands them to the
 * aggregation engine. Any role may read reports.
 *
 * # Routes
 *
 * - `GET /reports/project-progress`
 * - `GET /reports/user-workload`
 * - `GET /reports/task-priority-distribution`
 * - `GET /reports/task-user-distribution`
 */

use axum::{extract::State, response::Json};
use tracing::info;

use crate::backend::error::ReportError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::reports::engine;
use crate::backend::upstream::UpstreamClient;
use crate::shared::report::{
    PriorityDistribution, ProjectProgress, UserTaskDistribution, UserWorkload,
};

/// Get completion per project
///
/// # Errors
///
/// * `500 Internal Server Error` - If either upstream fetch fails or returns
///   records that cannot be decoded
pub async fn get_project_progress(
    State(upstream): State<UpstreamClient>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ProjectProgress>>, ReportError> {
    let (projects, tasks) = upstream.fetch_all(&user.token).await?;
    let report = engine::project_progress(&projects, &tasks);

    info!(
        user_id = %user.id,
        projects = projects.len(),
        tasks = tasks.len(),
        "Built project progress report"
    );
    Ok(Json(report))
}

/// Get task counts per assignee by status and priority
pub async fn get_user_workload(
    State(upstream): State<UpstreamClient>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<UserWorkload>>, ReportError> {
    let (projects, tasks) = upstream.fetch_all(&user.token).await?;
    let report = engine::user_workload(&tasks);

    info!(
        user_id = %user.id,
        projects = projects.len(),
        tasks = tasks.len(),
        users = report.len(),
        "Built user workload report"
    );
    Ok(Json(report))
}

/// Get task counts per priority
pub async fn get_task_priority_distribution(
    State(upstream): State<UpstreamClient>,
    AuthUser(user): AuthUser,
) -> Result<Json<PriorityDistribution>, ReportError> {
    let (projects, tasks) = upstream.fetch_all(&user.token).await?;
    let report = engine::priority_distribution(&tasks);

    info!(
        user_id = %user.id,
        projects = projects.len(),
        tasks = tasks.len(),
        "Built task priority distribution"
    );
    Ok(Json(report))
}

/// Get task counts per assignee
pub async fn get_task_user_distribution(
    State(upstream): State<UpstreamClient>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<UserTaskDistribution>>, ReportError> {
    let (projects, tasks) = upstream.fetch_all(&user.token).await?;
    let report = engine::user_task_distribution(&tasks);

    info!(
        user_id = %user.id,
        projects = projects.len(),
        tasks = tasks.len(),
        users = report.len(),
        "Built task user distribution"
    );
    Ok(Json(report))
}
