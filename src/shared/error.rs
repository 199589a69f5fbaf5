//! Wire Errors
//!
//! Failures turning bytes received over HTTP into workboard values: the
//! caller's `Authorization` value and the collections served upstream.
//! The backend decides what each one means for the request.
use thiserror::Error;

/// A value received over the wire that cannot be used
#[derive(Debug, Error)]
pub enum WireError {
    /// The `Authorization` value holds no usable bearer token
    #[error("malformed credential: {reason}")]
    Credential { reason: &'static str },

    /// An upstream body is not a JSON array of well-formed records
    #[error("not a list of {collection}: {source}")]
    Collection {
        /// Collection name as served upstream ("projects" or "tasks")
        collection: &'static str,
        source: serde_json::Error,
    },
}

impl WireError {
    pub fn credential(reason: &'static str) -> Self {
        Self::Credential { reason }
    }
}
