//! Wiring of the production task service.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::task::{
    adapters::{
        id::RandomIdGenerator,
        memory::{InMemoryTaskRepository, TaskStore},
    },
    services::{GeneratedTaskFactory, TaskLifecycleService},
};

/// Task factory used by the server.
pub type DefaultTaskFactory = GeneratedTaskFactory<RandomIdGenerator, DefaultClock>;

/// Task service backed by the in-memory store, random ids, and the system
/// clock.
pub type InMemoryTaskService =
    TaskLifecycleService<InMemoryTaskRepository, DefaultTaskFactory, DefaultClock>;

/// Builds a task service over the given store.
#[must_use]
pub fn in_memory_service(store: Arc<TaskStore>) -> InMemoryTaskService {
    let clock = Arc::new(DefaultClock);
    let factory = GeneratedTaskFactory::new(Arc::new(RandomIdGenerator), Arc::clone(&clock));
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::with_store(store)),
        Arc::new(factory),
        clock,
    )
}
