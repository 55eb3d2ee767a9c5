//! JSON request bodies.
//!
//! Fields are raw strings; validation happens in the task service. A missing
//! field decodes as an empty string so the service reports the precise
//! validation failure.

use serde::Deserialize;

/// Body for endpoints addressing a single task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskIdRequest {
    /// Raw task identifier.
    #[serde(default)]
    pub id: String,
}

/// Body for the create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Raw task title.
    #[serde(default)]
    pub title: String,
}

/// Body for the update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// Raw task identifier.
    #[serde(default)]
    pub id: String,
    /// Raw replacement title.
    #[serde(default)]
    pub title: String,
    /// Raw replacement status.
    #[serde(default)]
    pub status: String,
}
