//! Reports Module
//!
//! The four read-only report views and the engine that computes them.
//!
//! # Module Structure
//!
//! ```text
//! reports/
//! ├── mod.rs       - Module exports and documentation
//! ├── engine.rs    - Pure joins and reductions
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Request Flow
//!
//! 1. The auth middleware verifies the bearer token
//! 2. The handler fetches projects and tasks concurrently
//! 3. The engine reduces both collections into the report
//! 4. The report is returned as JSON
//!
//! If either fetch fails the request fails; a report is never built from a
//! partial pair of collections.

/// Aggregation engine
pub mod engine;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    get_project_progress, get_task_priority_distribution, get_task_user_distribution,
    get_user_workload,
};
