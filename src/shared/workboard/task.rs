//! Task Record
//!
//! Mirrors the task document served by `GET /tasks` on the task service.
//! `_id`, `projectId` and `assignedTo` are mandatory. `status` and
//! `priority` default to `to-do` and `medium` like the task schema does.
//! Any value outside the known set fails decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRef;

/// Progress state of a task
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to-do",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// Priority of a task
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Task as returned by the task service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Numeric task id
    #[serde(rename = "_id", alias = "id")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Assignee (join key into users)
    pub assigned_to: UserRef,
    /// Owning project (join key into projects)
    pub project_id: u64,
}

impl Task {
    /// Create a task with the join keys set and schema defaults elsewhere
    pub fn new(id: u64, project_id: u64, assigned_to: UserRef) -> Self {
        Self {
            id,
            title: String::new(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            deadline: None,
            assigned_to,
            project_id,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
