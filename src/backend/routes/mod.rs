//! Route Configuration Module
//!
//! HTTP routes of the reports service.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation
//! └── report_routes.rs  - Report endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness check
//! - `GET /reports/project-progress` - Completion per project
//! - `GET /reports/user-workload` - Task counts per assignee
//! - `GET /reports/task-priority-distribution` - Task counts per priority
//! - `GET /reports/task-user-distribution` - Task count per assignee

/// Main router creation
pub mod router;

/// Report endpoints
pub mod report_routes;

// Re-export commonly used functions
pub use router::create_router;
