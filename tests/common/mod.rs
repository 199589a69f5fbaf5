//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Upstream service mocks
//! - Authentication test helpers
//! - Upstream record fixtures

pub mod auth_helpers;
pub mod fixtures;
pub mod mock_upstream;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use fixtures::*;
pub use mock_upstream::*;
