//! Factory port for constructing new tasks.

use crate::task::domain::{Task, TaskTitle};

/// Builds new, valid [`Task`] values from already-validated input.
pub trait TaskFactory: Send + Sync {
    /// Creates a task with a fresh identifier, `TODO` status, and identical
    /// creation and update timestamps.
    fn new_task(&self, title: TaskTitle) -> Task;
}
