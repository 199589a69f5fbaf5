//! Backend Module
//!
//! Server-side code of the reports service: an Axum HTTP server that
//! verifies the caller, fetches the project and task collections from
//! their owning services and serves reports computed from them.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`middleware`** - Bearer token verification
//! - **`auth`** - JWT claims and verification
//! - **`upstream`** - HTTP client for the project and task services
//! - **`reports`** - Aggregation engine and report handlers
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request middleware
//! ├── auth/           - Token verification
//! ├── upstream/       - Upstream fetchers
//! ├── reports/        - Engine and handlers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the configuration and the upstream client, both
//! immutable after startup. Each request fetches its own copy of the
//! upstream collections; nothing is cached or shared between requests.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, ReportError>`. Auth failures become
//! 401/403, every other failure becomes a 500 carrying the best available
//! message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Token verification
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Upstream project and task fetchers
pub mod upstream;

/// Report engine and handlers
pub mod reports;

/// Re-export commonly used types
pub use error::ReportError;
pub use server::create_app;
