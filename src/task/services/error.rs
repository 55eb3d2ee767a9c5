//! Service-level errors for task use cases.

use std::fmt;

use thiserror::Error;

use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError};

/// Use case during which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOperation {
    /// Fetch a single task.
    Get,
    /// Enumerate all tasks.
    List,
    /// Create a task.
    Create,
    /// Replace a task's title and status.
    Update,
    /// Remove a task.
    Delete,
}

impl TaskOperation {
    /// Returns the call-site label used in error messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "TaskLifecycleService::get",
            Self::List => "TaskLifecycleService::list",
            Self::Create => "TaskLifecycleService::create",
            Self::Update => "TaskLifecycleService::update",
            Self::Delete => "TaskLifecycleService::delete",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure category a caller can branch on without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// The supplied identifier was empty.
    InvalidId,
    /// The supplied title was empty.
    InvalidTitle,
    /// The supplied status was not a recognised literal.
    InvalidStatus,
    /// The referenced task does not exist.
    NotFound,
    /// Unexpected storage or runtime failure.
    Internal,
}

impl TaskErrorKind {
    /// Returns `true` for failures caused by malformed caller input.
    #[must_use]
    pub const fn is_invalid_input(self) -> bool {
        matches!(
            self,
            Self::InvalidId | Self::InvalidTitle | Self::InvalidStatus
        )
    }
}

/// Errors returned by [`TaskLifecycleService`](super::TaskLifecycleService)
/// operations, tagged with the operation that produced them.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error("{operation}: {source}")]
    Domain {
        /// Operation that rejected the input.
        operation: TaskOperation,
        /// Underlying validation failure.
        source: TaskDomainError,
    },
    /// Repository operation failed.
    #[error("{operation}: {source}")]
    Repository {
        /// Operation that issued the repository call.
        operation: TaskOperation,
        /// Underlying repository failure.
        source: TaskRepositoryError,
    },
}

impl TaskLifecycleError {
    /// Returns the operation that produced this error.
    #[must_use]
    pub const fn operation(&self) -> TaskOperation {
        match self {
            Self::Domain { operation, .. } | Self::Repository { operation, .. } => *operation,
        }
    }

    /// Classifies this error for the caller.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Domain { source, .. } => match source {
                TaskDomainError::InvalidId(_) => TaskErrorKind::InvalidId,
                TaskDomainError::InvalidTitle => TaskErrorKind::InvalidTitle,
                TaskDomainError::InvalidStatus(_) => TaskErrorKind::InvalidStatus,
            },
            Self::Repository { source, .. } => match source {
                TaskRepositoryError::NotFound(_) => TaskErrorKind::NotFound,
                TaskRepositoryError::Persistence(_) => TaskErrorKind::Internal,
            },
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Tags a lower-layer failure with the operation that observed it.
pub(super) trait InOperation<T> {
    fn in_operation(self, operation: TaskOperation) -> TaskLifecycleResult<T>;
}

impl<T> InOperation<T> for Result<T, TaskDomainError> {
    fn in_operation(self, operation: TaskOperation) -> TaskLifecycleResult<T> {
        self.map_err(|source| TaskLifecycleError::Domain { operation, source })
    }
}

impl<T> InOperation<T> for Result<T, TaskRepositoryError> {
    fn in_operation(self, operation: TaskOperation) -> TaskLifecycleResult<T> {
        self.map_err(|source| TaskLifecycleError::Repository { operation, source })
    }
}
