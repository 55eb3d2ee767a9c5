//! JSON response bodies and error codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{
    domain::{Task, TaskStatus},
    services::TaskErrorKind,
};

/// Machine-readable error code returned in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The body could not be decoded or failed validation.
    InvalidRequestBody,
    /// The route does not accept the request method.
    MethodNotAllowed,
    /// The referenced task does not exist.
    NotFound,
    /// The server failed unexpectedly.
    InternalServerError,
}

impl ErrorCode {
    /// Returns the HTTP status paired with this code.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequestBody => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskErrorKind> for ErrorCode {
    fn from(kind: TaskErrorKind) -> Self {
        match kind {
            TaskErrorKind::InvalidId | TaskErrorKind::InvalidTitle | TaskErrorKind::InvalidStatus => {
                Self::InvalidRequestBody
            }
            TaskErrorKind::NotFound => Self::NotFound,
            TaskErrorKind::Internal => Self::InternalServerError,
        }
    }
}

impl IntoResponse for ErrorCode {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse { error_code: self })).into_response()
    }
}

/// Error body: `{"errorCode": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Code identifying the failure.
    pub error_code: ErrorCode,
}

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task status literal.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_string(),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Every stored task, in unspecified order.
    pub tasks: Vec<TaskResponse>,
}

impl From<&[Task]> for TaskListResponse {
    fn from(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.iter().map(TaskResponse::from).collect(),
        }
    }
}
