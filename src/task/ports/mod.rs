//! Port contracts for the task core.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod factory;
pub mod id_generator;
pub mod repository;

pub use factory::TaskFactory;
pub use id_generator::IdGenerator;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
