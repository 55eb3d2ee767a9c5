//! Taskdesk: a layered CRUD service for a single task resource.
//!
//! Tasks are created, read, updated, listed, and deleted over JSON-over-HTTP
//! endpoints and kept in an in-memory store.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: task entity and input validators with no infrastructure
//!   dependencies
//! - **Ports**: repository, factory, and identifier-generation traits
//! - **Adapters**: in-memory storage and random identifiers
//! - **Services**: use-case orchestration over the ports
//!
//! # Modules
//!
//! - [`task`]: task domain, ports, adapters, and lifecycle service
//! - [`http`]: axum router and request handlers
//! - [`app`]: production wiring of the task service
//! - [`config`]: command-line and environment configuration
//! - [`telemetry`]: logging setup

pub mod app;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
