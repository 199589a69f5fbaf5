//! Upstream record fixtures
//!
//! JSON documents shaped like the ones the project and task services
//! return, `_id` keys and timestamps included.

use serde_json::{json, Value};

pub fn project_json(id: u64, name: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "description": format!("{} description", name),
        "startDate": "2024-01-01T00:00:00.000Z",
        "endDate": "2024-12-31T00:00:00.000Z",
        "status": status,
        "categories": ["internal"],
        "createdBy": {"_id": "admin", "name": "Admin"},
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "__v": 0
    })
}

pub fn task_json(
    id: u64,
    project_id: u64,
    user: (&str, &str),
    status: &str,
    priority: &str,
) -> Value {
    json!({
        "_id": id,
        "title": format!("Task {}", id),
        "priority": priority,
        "deadline": "2024-06-01T00:00:00.000Z",
        "status": status,
        "assignedTo": {"_id": user.0, "name": user.1},
        "projectId": project_id,
        "comments": [],
        "attachments": [],
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "__v": 0
    })
}

/// Two projects and four tasks, one of them on a deleted project
pub fn sample_projects() -> Value {
    json!([
        project_json(10, "Website", "active"),
        project_json(11, "Mobile app", "on-hold")
    ])
}

pub fn sample_tasks() -> Value {
    json!([
        task_json(1, 10, ("u1", "Ann"), "done", "high"),
        task_json(2, 10, ("u1", "Ann"), "to-do", "high"),
        task_json(3, 10, ("u2", "Bob"), "in-progress", "low"),
        task_json(4, 99, ("u2", "Robert"), "done", "medium")
    ])
}
