//! Workboard Reports - Main Library
//!
//! Workboard is a small project/task management system split into
//! independently owned services (auth, projects, tasks, collaboration).
//! This crate implements its **reports service**: a read-only HTTP service
//! that fetches the current project and task collections from their owning
//! services, joins them in memory and serves derived reports.
//!
//! # Overview
//!
//! - Project progress (completion percentage per project)
//! - User workload (task counts per assignee, by status and priority)
//! - Task priority distribution
//! - Task distribution per assignee
//!
//! # Module Structure
//!
//! - **`shared`** - Types that describe data on the wire
//!   - Upstream project/task records
//!   - Derived report payloads
//!   - Configuration and shared error types
//!
//! - **`backend`** - The Axum HTTP server
//!   - Bearer token verification middleware
//!   - Upstream HTTP clients for the project and task services
//!   - The aggregation engine and report handlers
//!   - Error to HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use workboard_reports::backend::server::init::create_app;
//! use workboard_reports::shared::config::AppConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("secret").build()?;
//! let app = create_app(&config)?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Consistency
//!
//! The project and task services own their collections; there is no shared
//! database or transaction. Every report is computed from one pair of
//! fetches made for that request, and a failure of either fetch fails the
//! whole request. Tasks that reference a project or user that no longer
//! exists are valid input.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
