use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task entity as stored in the database and returned by the API.
///
/// Each task belongs to exactly one user (`user_id`); the owner is fixed at
/// creation time and is not changed by updates.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: i64,
}

/// Payload for creating a task. New tasks always start uncompleted.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for updating a task.
///
/// Updates overwrite the whole mutable record rather than patching it:
/// any field absent from the request body falls back to its default
/// (`""`, `null`, `false`) and is written as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
