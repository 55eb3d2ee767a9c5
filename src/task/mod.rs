//! Task resource management for taskdesk.
//!
//! Tasks are created, read, updated, listed, and deleted through
//! [`services::TaskLifecycleService`], which validates raw input, applies the
//! domain rules, and persists changes through a repository port. The module
//! follows hexagonal architecture:
//!
//! - Domain types and validators in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
