//! Random identifier generator.

use crate::task::{domain::TaskId, ports::IdGenerator};
use uuid::Uuid;

/// Generates 128-bit random identifiers rendered as lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_id(&self) -> TaskId {
        TaskId::from_uuid(Uuid::new_v4())
    }
}
