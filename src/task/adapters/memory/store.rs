//! Shared in-memory task store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepositoryError, TaskRepositoryResult},
};

/// Keyed task storage guarded by a single store-wide lock.
///
/// Writers hold the exclusive lock for one map mutation at a time; readers
/// share the lock so they never observe a partially replaced entry.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires shared read access to the stored tasks.
    pub(super) fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.read().map_err(poisoned)
    }

    /// Acquires exclusive write access to the stored tasks.
    pub(super) fn write(
        &self,
    ) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.write().map_err(poisoned)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}
