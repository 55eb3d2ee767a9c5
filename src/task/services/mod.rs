//! Application services for task lifecycle orchestration.

mod error;
mod factory;
mod lifecycle;

pub use error::{TaskErrorKind, TaskLifecycleError, TaskLifecycleResult, TaskOperation};
pub use factory::GeneratedTaskFactory;
pub use lifecycle::TaskLifecycleService;
