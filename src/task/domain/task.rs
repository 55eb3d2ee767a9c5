//! Task aggregate root and its status enumeration.

use super::{TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    #[default]
    Todo,
    /// The task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "TODO" => Ok(Self::Todo),
            "DONE" => Ok(Self::Done),
            _ => Err(TaskDomainError::InvalidStatus(value.to_owned())),
        }
    }
}

/// Parses a task status from untrusted input.
///
/// Only the exact literals `TODO` and `DONE` are accepted; the input is
/// neither trimmed nor case-folded.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidStatus`] for any other value.
pub fn parse_status(raw: &str) -> Result<TaskStatus, TaskDomainError> {
    TaskStatus::try_from(raw)
}

/// Task aggregate root.
///
/// Only [`Task::new`] builds a task, so the timestamps always satisfy
/// `created_at <= updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the [`TaskStatus::Todo`] state.
    ///
    /// Both timestamps are taken from a single clock reading.
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title,
            status: TaskStatus::Todo,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title and status and refreshes `updated_at`.
    pub fn update(&mut self, title: TaskTitle, status: TaskStatus, clock: &impl Clock) {
        self.title = title;
        self.status = status;
        self.touch(clock);
    }

    /// Advances `updated_at` to the current clock time.
    ///
    /// A clock that has not moved past the previous value still yields a
    /// strictly later timestamp. At the upper bound of `DateTime<Utc>` the
    /// value saturates and is left unchanged.
    fn touch(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at
                .checked_add_signed(TimeDelta::nanoseconds(1))
                .unwrap_or(self.updated_at)
        };
    }
}
