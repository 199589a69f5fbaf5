//! Middleware Module
//!
//! Request processing middleware for the report routes.
//!
//! - **`auth`** - Bearer token verification and the `AuthUser` extractor

/// Authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
