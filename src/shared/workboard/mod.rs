//! Workboard Records
//!
//! Records owned by the project and task services, as this service receives
//! them over HTTP. They are read-only here and are decoded fresh for every
//! report request.
//!
//! # Identifiers
//!
//! The upstream services expose document ids as `_id`. Both `_id` and `id`
//! are accepted when decoding so that either naming decodes to the same
//! record.
//!
//! # Join Keys
//!
//! - `Task::project_id` refers to `Project::id`
//! - `Task::assigned_to.id` refers to a user owned by the auth service
//!
//! Neither reference is guaranteed to resolve. A task may point at a project
//! or a user that has since been deleted.
//!
//! User ids are auto-incremented numbers in the auth service but are copied
//! into tasks and projects as strings. Both forms decode to the same
//! `String` through [`user_id`].

/// Project record from the project service
pub mod project;

/// Task record from the task service
pub mod task;

pub use project::{Project, ProjectStatus};
pub use task::{Task, TaskPriority, TaskStatus};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::shared::error::WireError;

/// Decode an upstream response body into a list of records
///
/// The whole list fails on the first record that does not decode.
pub fn decode_records<T: DeserializeOwned>(
    collection: &'static str,
    body: &[u8],
) -> Result<Vec<T>, WireError> {
    serde_json::from_slice(body).map_err(|source| WireError::Collection { collection, source })
}

/// Reference to a user as embedded in project and task records
///
/// Upstream services copy the user's id and display name into the record
/// when it is written, so the name is a snapshot and may differ between
/// records that reference the same user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    /// User id (opaque string issued by the auth service)
    #[serde(rename = "_id", alias = "id", deserialize_with = "user_id")]
    pub id: String,
    /// Display name at the time the record was written
    #[serde(default)]
    pub name: Option<String>,
}

/// Decode a user id sent either as a JSON number or a string
pub fn user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(id) => id.to_string(),
        RawId::Text(id) => id,
    })
}

impl UserRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}
