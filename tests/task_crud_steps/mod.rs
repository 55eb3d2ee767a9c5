//! Step definitions for task lifecycle behaviour scenarios.

pub mod then;
pub mod when;
