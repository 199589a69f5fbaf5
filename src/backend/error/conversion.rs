/**
 * Error Conversion
 *
 * Renders a `ReportError` as an HTTP response so that handlers and
 * middleware can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Request failed with status code 503",
 *   "status": 500
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::ReportError;

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        match &self {
            ReportError::Unauthorized { .. } => {
                tracing::warn!(status = status.as_u16(), "{}", self);
            }
            _ => {
                tracing::error!(status = status.as_u16(), "{}", self);
            }
        }

        let body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Error body as sent to callers
#[derive(Debug, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}
