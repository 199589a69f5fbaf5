//! Upstream Module
//!
//! Fetchers for the collections owned by other services. The reports
//! service has no database of its own; everything it reports on is read
//! from the project and task services at request time.
//!
//! # Module Structure
//!
//! ```text
//! upstream/
//! ├── mod.rs      - Module exports and documentation
//! ├── token.rs    - Bearer credential normalisation
//! └── client.rs   - HTTP client for /projects and /tasks
//! ```

/// HTTP client for the project and task services
pub mod client;

/// Bearer credential forwarded upstream
pub mod token;

pub use client::{Collection, UpstreamClient};
pub use token::BearerToken;
