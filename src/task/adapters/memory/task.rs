//! In-memory task repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::TaskStore;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository backed by a shared [`TaskStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: Arc<TaskStore>,
}

impl InMemoryTaskRepository {
    /// Creates a repository over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository over an existing store.
    ///
    /// Repositories built from the same store observe each other's writes.
    #[must_use]
    pub const fn with_store(store: Arc<TaskStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let tasks = self.store.read()?;
        tasks
            .get(id)
            .cloned()
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.store.read()?;
        Ok(tasks.values().cloned().collect())
    }

    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.store.write()?;
        tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.store.write()?;
        let stored = tasks
            .get_mut(task.id())
            .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.store.write()?;
        tasks
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }
}
