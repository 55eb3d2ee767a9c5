//! In-memory adapters for the task ports.

mod store;
mod task;

pub use store::TaskStore;
pub use task::InMemoryTaskRepository;
