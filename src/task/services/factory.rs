//! Default task factory.

use std::sync::Arc;

use mockable::Clock;

use crate::task::{
    domain::{Task, TaskTitle},
    ports::{IdGenerator, TaskFactory},
};

/// Task factory that draws identifiers from an [`IdGenerator`] and
/// timestamps from a [`Clock`].
#[derive(Debug, Clone)]
pub struct GeneratedTaskFactory<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    generator: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> GeneratedTaskFactory<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a factory from its collaborators.
    #[must_use]
    pub const fn new(generator: Arc<G>, clock: Arc<C>) -> Self {
        Self { generator, clock }
    }
}

impl<G, C> TaskFactory for GeneratedTaskFactory<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    fn new_task(&self, title: TaskTitle) -> Task {
        Task::new(self.generator.new_id(), title, &*self.clock)
    }
}
