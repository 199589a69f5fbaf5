//! Backend Error Module
//!
//! Errors raised while serving a report request, and their conversion into
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `Unauthorized` - Missing or invalid bearer credential (401 / 403)
//! - `UpstreamFetch` - Project or task service failure (500)
//! - `Aggregation` - Undecodable upstream payload (500)
//!
//! # HTTP Response Conversion
//!
//! `ReportError` implements `IntoResponse`, so handlers return
//! `Result<Json<T>, ReportError>` and the error becomes a JSON body of the
//! form `{"message": ..., "status": ...}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::ReportError;
