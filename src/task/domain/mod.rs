//! Domain model for the task resource.
//!
//! The domain owns field-level validation: every raw string crossing into the
//! core passes through [`parse_id`], [`parse_title`], or [`parse_status`]
//! before a [`Task`] is built or mutated.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle, parse_id, parse_title};
pub use task::{Task, TaskStatus, parse_status};
