//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while parsing untrusted input into domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("invalid task id {0:?}, expected a non-empty value")]
    InvalidId(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    InvalidTitle,

    /// The status is not one of the supported literals.
    #[error("invalid task status {0:?}, expected TODO or DONE")]
    InvalidStatus(String),
}
