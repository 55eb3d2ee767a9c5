//! Task use cases: validation, repository access, and domain mutation.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use super::error::{InOperation, TaskLifecycleResult, TaskOperation};
use crate::task::{
    domain::{Task, parse_id, parse_status, parse_title},
    ports::{TaskFactory, TaskRepository},
};

/// Task lifecycle orchestration service.
///
/// Every operation validates its raw inputs before touching the repository,
/// so a rejected call never leaves a stored task partially modified.
#[derive(Clone)]
pub struct TaskLifecycleService<R, F, C>
where
    R: TaskRepository,
    F: TaskFactory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    factory: Arc<F>,
    clock: Arc<C>,
}

impl<R, F, C> TaskLifecycleService<R, F, C>
where
    R: TaskRepository,
    F: TaskFactory,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, factory: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            repository,
            factory,
            clock,
        }
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`](super::TaskLifecycleError) of kind
    /// `InvalidId`, `NotFound`, or `Internal`.
    pub async fn get(&self, id: &str) -> TaskLifecycleResult<Task> {
        let op = TaskOperation::Get;
        let task_id = parse_id(id).in_operation(op)?;
        self.repository.get(&task_id).await.in_operation(op)
    }

    /// Lists every stored task.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` [`TaskLifecycleError`](super::TaskLifecycleError)
    /// when the repository cannot be read.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        self.repository
            .list()
            .await
            .in_operation(TaskOperation::List)
    }

    /// Creates a task with the given title and `TODO` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`](super::TaskLifecycleError) of kind
    /// `InvalidTitle` or `Internal`.
    pub async fn create(&self, title: &str) -> TaskLifecycleResult<Task> {
        let op = TaskOperation::Create;
        let task_title = parse_title(title).in_operation(op)?;
        let task = self.factory.new_task(task_title);
        self.repository.create(&task).await.in_operation(op)?;
        debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Replaces the title and status of an existing task.
    ///
    /// Inputs are validated in the order id, title, status; the first
    /// failure is reported.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`](super::TaskLifecycleError) of kind
    /// `InvalidId`, `InvalidTitle`, `InvalidStatus`, `NotFound`, or
    /// `Internal`.
    pub async fn update(&self, id: &str, title: &str, status: &str) -> TaskLifecycleResult<Task> {
        let op = TaskOperation::Update;
        let task_id = parse_id(id).in_operation(op)?;
        let task_title = parse_title(title).in_operation(op)?;
        let task_status = parse_status(status).in_operation(op)?;

        let mut task = self.repository.get(&task_id).await.in_operation(op)?;
        task.update(task_title, task_status, &*self.clock);
        self.repository.update(&task).await.in_operation(op)?;
        debug!(task_id = %task.id(), status = task.status().as_str(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Deletion is not idempotent: removing an absent task fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`](super::TaskLifecycleError) of kind
    /// `InvalidId`, `NotFound`, or `Internal`.
    pub async fn delete(&self, id: &str) -> TaskLifecycleResult<()> {
        let op = TaskOperation::Delete;
        let task_id = parse_id(id).in_operation(op)?;
        self.repository.delete(&task_id).await.in_operation(op)?;
        debug!(task_id = %task_id, "task deleted");
        Ok(())
    }
}
