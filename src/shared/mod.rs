//! Shared Module
//!
//! This module contains the types that describe data on the wire: the
//! records served by the upstream project and task services, the report
//! payloads this service returns, and the configuration and error types
//! used across the crate.
//!
//! # Overview
//!
//! Nothing in here performs I/O. The backend decodes upstream responses into
//! `workboard` records, reduces them into `report` payloads and serializes
//! those back to JSON.

/// Upstream project and task records
pub mod workboard;

/// Derived report payloads
pub mod report;

/// Wire decoding errors
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use workboard::{decode_records, Project, ProjectStatus, Task, TaskPriority, TaskStatus, UserRef};
pub use report::{
    Percentage, PriorityCounts, PriorityDistribution, ProjectProgress, StatusCounts,
    UserTaskDistribution, UserWorkload,
};
pub use error::WireError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, UpstreamConfig};
