/**
 * Backend Error Types
 *
 * This module defines the errors a report request can end in. Every one of
 * them is terminal for the request that raised it and none of them affect
 * other requests.
 *
 * # Error Categories
 *
 * ## Authorization Errors
 *
 * The caller's credential is missing, malformed, forged or expired. The
 * request is rejected before any upstream service is contacted.
 *
 * ## Upstream Fetch Errors
 *
 * The project or task service could not be reached, timed out, or answered
 * with a non-success status. The upstream's own error message is carried
 * through when it sent one.
 *
 * ## Aggregation Errors
 *
 * An upstream answered successfully but its payload could not be decoded
 * into the expected records (missing join keys, unknown status or priority
 * values, non-array bodies).
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::WireError;

pub const NO_TOKEN_MESSAGE: &str = "Access denied. No token provided.";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Errors that end a report request
///
/// Each variant maps to an HTTP status through [`ReportError::status_code`]
/// and is rendered as a JSON body by the `IntoResponse` implementation in
/// `conversion`.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Missing or invalid credential
    #[error("Authorization error: {message}")]
    Unauthorized {
        /// 401 for a bad credential, 403 for a missing one
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The project or task service failed to deliver its collection
    #[error("Upstream {service} service error: {message}")]
    UpstreamFetch {
        /// Which upstream failed ("project" or "task")
        service: &'static str,
        /// HTTP status returned by the upstream, if it answered at all
        status: Option<u16>,
        /// Upstream message, or a transport description
        message: String,
    },

    /// An upstream payload could not be turned into records
    #[error("Aggregation error: {message}")]
    Aggregation {
        /// Human-readable error message
        message: String,
    },
}

impl ReportError {
    /// The caller sent no credential at all
    pub fn missing_token() -> Self {
        Self::Unauthorized {
            status: StatusCode::FORBIDDEN,
            message: NO_TOKEN_MESSAGE.to_string(),
        }
    }

    /// The caller's credential did not verify
    pub fn invalid_token() -> Self {
        Self::Unauthorized {
            status: StatusCode::UNAUTHORIZED,
            message: INVALID_TOKEN_MESSAGE.to_string(),
        }
    }

    /// Create an upstream fetch error
    ///
    /// # Arguments
    ///
    /// * `service` - Name of the failing upstream
    /// * `status` - Status code the upstream answered with, if any
    /// * `message` - Error message
    pub fn upstream(service: &'static str, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::UpstreamFetch {
            service,
            status,
            message: message.into(),
        }
    }

    /// Create an aggregation error
    pub fn aggregation(message: impl Into<String>) -> Self {
        Self::Aggregation {
            message: message.into(),
        }
    }

    /// Wrap a decoding failure of an upstream payload
    pub fn malformed_payload(service: &'static str, err: WireError) -> Self {
        Self::aggregation(format!("malformed {service} payload: {err}"))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized` - 401 or 403, as recorded in the error
    /// - `UpstreamFetch` - 500 Internal Server Error
    /// - `Aggregation` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { status, .. } => *status,
            Self::UpstreamFetch { .. } | Self::Aggregation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message shown to the caller
    ///
    /// Upstream messages are passed through unchanged so that callers see
    /// what the owning service reported.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message, .. } => message.clone(),
            Self::UpstreamFetch { message, .. } => message.clone(),
            Self::Aggregation { message } => message.clone(),
        }
    }
}
