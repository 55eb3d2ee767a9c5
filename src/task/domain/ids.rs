//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a task record.
///
/// Always non-empty and free of surrounding whitespace. Deserialisation goes
/// through [`TaskId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Parses a raw identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidId`] when the trimmed value is empty.
    pub fn parse(raw: &str) -> Result<Self, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::InvalidId(raw.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates an identifier from a UUID rendered as 32 lowercase hex digits.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.simple().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable task title, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Parses a raw title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTitle`] when the trimmed value is
    /// empty.
    pub fn parse(raw: &str) -> Result<Self, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::InvalidTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a task identifier from untrusted input.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidId`] for empty or whitespace-only input.
pub fn parse_id(raw: &str) -> Result<TaskId, TaskDomainError> {
    TaskId::parse(raw)
}

/// Parses a task title from untrusted input.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTitle`] for empty or whitespace-only
/// input.
pub fn parse_title(raw: &str) -> Result<TaskTitle, TaskDomainError> {
    TaskTitle::parse(raw)
}
