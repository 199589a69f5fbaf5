//! Project Record
//!
//! Mirrors the project document served by `GET /projects` on the project
//! service. Only `_id` is mandatory; the remaining fields fall back to the
//! project schema's defaults when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRef;

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
        }
    }
}

/// Project as returned by the project service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric project id
    #[serde(rename = "_id", alias = "id")]
    pub id: u64,
    /// Project name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Free-form category labels
    #[serde(default)]
    pub categories: Vec<String>,
    /// Creator of the project
    #[serde(default)]
    pub created_by: Option<UserRef>,
}

impl Project {
    /// Create a project with only an id and a name set
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            status: ProjectStatus::default(),
            start_date: None,
            end_date: None,
            categories: Vec::new(),
            created_by: None,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}
