//! Request handlers translating HTTP bodies into task service calls.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mockable::Clock;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use super::{
    request::{CreateTaskRequest, TaskIdRequest, UpdateTaskRequest},
    response::{ErrorCode, TaskListResponse, TaskResponse},
};
use crate::task::{
    ports::{TaskFactory, TaskRepository},
    services::{TaskErrorKind, TaskLifecycleError, TaskLifecycleService},
};

/// Shared handler state.
pub type ServiceState<R, F, C> = State<Arc<TaskLifecycleService<R, F, C>>>;

/// Decodes a JSON request body regardless of its `Content-Type` header.
///
/// A body that is not valid JSON for the route yields the
/// `INVALID_REQUEST_BODY` response.
fn decode<T: DeserializeOwned>(route: &'static str, body: &Bytes) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(route, error = %err, "rejected request body");
        ErrorCode::InvalidRequestBody.into_response()
    })
}

/// Maps a service failure to its error body, logging by severity.
fn failure(route: &'static str, err: &TaskLifecycleError) -> Response {
    let kind = err.kind();
    if kind == TaskErrorKind::Internal {
        error!(route, error = %err, "task request failed");
    } else {
        warn!(route, error = %err, ?kind, "task request rejected");
    }
    ErrorCode::from(kind).into_response()
}

/// `POST /v1/task/get`
pub async fn get_task<R, F, C>(
    State(service): ServiceState<R, F, C>,
    body: Bytes,
) -> Response
where
    R: TaskRepository + 'static,
    F: TaskFactory + 'static,
    C: Clock + Send + Sync + 'static,
{
    const ROUTE: &str = "/v1/task/get";
    let request: TaskIdRequest = match decode(ROUTE, &body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service.get(&request.id).await {
        Ok(task) => Json(TaskResponse::from(&task)).into_response(),
        Err(err) => failure(ROUTE, &err),
    }
}

/// `POST /v1/task/list`
pub async fn list_tasks<R, F, C>(State(service): ServiceState<R, F, C>) -> Response
where
    R: TaskRepository + 'static,
    F: TaskFactory + 'static,
    C: Clock + Send + Sync + 'static,
{
    match service.list().await {
        Ok(tasks) => Json(TaskListResponse::from(tasks.as_slice())).into_response(),
        Err(err) => failure("/v1/task/list", &err),
    }
}

/// `POST /v1/task/create`
pub async fn create_task<R, F, C>(
    State(service): ServiceState<R, F, C>,
    body: Bytes,
) -> Response
where
    R: TaskRepository + 'static,
    F: TaskFactory + 'static,
    C: Clock + Send + Sync + 'static,
{
    const ROUTE: &str = "/v1/task/create";
    let request: CreateTaskRequest = match decode(ROUTE, &body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service.create(&request.title).await {
        Ok(task) => Json(TaskResponse::from(&task)).into_response(),
        Err(err) => failure(ROUTE, &err),
    }
}

/// `POST /v1/task/update`
pub async fn update_task<R, F, C>(
    State(service): ServiceState<R, F, C>,
    body: Bytes,
) -> Response
where
    R: TaskRepository + 'static,
    F: TaskFactory + 'static,
    C: Clock + Send + Sync + 'static,
{
    const ROUTE: &str = "/v1/task/update";
    let request: UpdateTaskRequest = match decode(ROUTE, &body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service
        .update(&request.id, &request.title, &request.status)
        .await
    {
        Ok(task) => Json(TaskResponse::from(&task)).into_response(),
        Err(err) => failure(ROUTE, &err),
    }
}

/// `POST /v1/task/delete`
pub async fn delete_task<R, F, C>(
    State(service): ServiceState<R, F, C>,
    body: Bytes,
) -> Response
where
    R: TaskRepository + 'static,
    F: TaskFactory + 'static,
    C: Clock + Send + Sync + 'static,
{
    const ROUTE: &str = "/v1/task/delete";
    let request: TaskIdRequest = match decode(ROUTE, &body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service.delete(&request.id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => failure(ROUTE, &err),
    }
}

/// Answers task routes called with anything other than `POST`.
pub async fn method_not_allowed() -> Response {
    warn!("rejected request with unsupported method");
    ErrorCode::MethodNotAllowed.into_response()
}

/// `GET /healthz`
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
