//! JSON-over-HTTP transport for the task service.
//!
//! Every task operation is an RPC-style `POST` under `/v1/task/`. Bodies and
//! errors are JSON; error bodies carry a stable [`ErrorCode`].

pub mod handlers;
pub mod request;
pub mod response;

use std::sync::Arc;

use axum::{
    Router,
    routing::{MethodRouter, get, post},
};
use mockable::Clock;

pub use response::{ErrorCode, ErrorResponse, TaskListResponse, TaskResponse};

use crate::task::{
    ports::{TaskFactory, TaskRepository},
    services::TaskLifecycleService,
};

/// Builds the application router around a task service.
pub fn router<R, F, C>(service: Arc<TaskLifecycleService<R, F, C>>) -> Router
where
    R: TaskRepository + 'static,
    F: TaskFactory + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/v1/task/get", post_only(post(handlers::get_task::<R, F, C>)))
        .route("/v1/task/list", post_only(post(handlers::list_tasks::<R, F, C>)))
        .route(
            "/v1/task/create",
            post_only(post(handlers::create_task::<R, F, C>)),
        )
        .route(
            "/v1/task/update",
            post_only(post(handlers::update_task::<R, F, C>)),
        )
        .route(
            "/v1/task/delete",
            post_only(post(handlers::delete_task::<R, F, C>)),
        )
        .route("/healthz", get(handlers::healthz))
        .with_state(service)
}

fn post_only<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.fallback(handlers::method_not_allowed)
}
