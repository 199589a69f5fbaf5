//! Report Payloads
//!
//! Derived, per-request views computed by joining the project and task
//! collections. None of these are persisted. Field names are serialized in
//! camelCase to match the other workboard services.
//!
//! # Payloads
//!
//! - `ProjectProgress` - completion of one project
//! - `UserWorkload` - task counts of one assignee, by status and priority
//! - `PriorityDistribution` - task counts per priority
//! - `UserTaskDistribution` - task count of one assignee

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::shared::workboard::{ProjectStatus, TaskPriority, TaskStatus};

/// Completion percentage in `0.00..=100.00`
///
/// Held as whole hundredths of a percent. Ties round up, so 1 of 32 is
/// `3.13`. Serialized as a string with exactly two decimals (`"50.00"`),
/// which is the format clients of the reports service expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percentage(u64);

impl Percentage {
    /// Percentage of `part` in `whole`, or zero when `whole` is zero
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self(0);
        }
        let (part, whole) = (part as u64, whole as u64);
        Self((part * 20_000 + whole) / (2 * whole))
    }

    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Upstream dates are echoed with millisecond precision (`2024-01-01T00:00:00.000Z`)
fn serialize_timestamp<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}

/// Completion of a single project
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub project_id: u64,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(serialize_with = "serialize_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    /// Tasks whose `projectId` matches this project
    pub total_tasks: usize,
    /// Matching tasks with status `done`
    pub completed_tasks: usize,
    pub progress: Percentage,
}

/// Per-status task counts; all three keys are always present
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    #[serde(rename = "to-do")]
    pub to_do: usize,
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::ToDo => self.to_do += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Done => self.done += 1,
        }
    }

    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::ToDo => self.to_do,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.to_do + self.in_progress + self.done
    }
}

/// Per-priority task counts; all three keys are always present
///
/// Also the payload of the priority distribution report.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityCounts {
    pub fn record(&mut self, priority: TaskPriority) {
        match priority {
            TaskPriority::Low => self.low += 1,
            TaskPriority::Medium => self.medium += 1,
            TaskPriority::High => self.high += 1,
        }
    }

    pub fn get(&self, priority: TaskPriority) -> usize {
        match priority {
            TaskPriority::Low => self.low,
            TaskPriority::Medium => self.medium,
            TaskPriority::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Task counts per priority across the whole task collection
pub type PriorityDistribution = PriorityCounts;

/// Workload of a single assignee
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserWorkload {
    pub user_id: String,
    /// Name taken from the first task assigned to this user
    pub name: Option<String>,
    pub total_tasks: usize,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
}

/// Number of tasks assigned to a single user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserTaskDistribution {
    pub user_id: String,
    pub name: Option<String>,
    pub task_count: usize,
}
