//! Identifier generation port.

use crate::task::domain::TaskId;

/// Produces fresh, unique task identifiers.
///
/// Implementations are infallible; a generator that cannot produce an
/// identifier must panic rather than return a sentinel.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier that has not been handed out before.
    fn new_id(&self) -> TaskId;
}
