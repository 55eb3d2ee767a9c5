//! Adapter implementations of the task ports.

pub mod id;
pub mod memory;
