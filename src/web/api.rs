//! JSON API handlers for the task board.
//!
//! Task store errors are translated into kind-specific status codes:
//! validation failures map to 400, missing tasks to 404, and storage
//! failures to 500, each with an `{"error": ...}` body.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mockable::Clock;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskBoardError},
};

use super::state::AppState;

/// Error response carrying a status code and message payload.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Maps a service error onto its kind-specific status code, logging
/// rejections at debug and storage failures at error.
pub(crate) fn map_error(action: &'static str, error: &TaskBoardError) -> ApiError {
    let status = if error.is_not_found() {
        tracing::debug!(action, error = %error, "request rejected");
        StatusCode::NOT_FOUND
    } else if error.is_validation() {
        tracing::debug!(action, error = %error, "request rejected");
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(action, error = %error, "storage failure");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    ApiError::new(status, error.to_string())
}

/// Request body for `POST /tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTaskBody {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(body.title);
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(priority) = body.priority {
            request = request.with_priority(priority);
        }
        if let Some(due_date) = body.due_date {
            request = request.with_due_date(due_date);
        }
        request
    }
}

/// Request body for `PATCH /tasks/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateStatusBody {
    status: String,
}

/// `GET /tasks` — all tasks, newest first.
pub(crate) async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state
        .service
        .list_tasks()
        .await
        .map_err(|error| map_error("list tasks", &error))?;
    Ok(Json(tasks))
}

/// `POST /tasks` — create a task.
pub(crate) async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state
        .service
        .create_task(body.into())
        .await
        .map_err(|error| map_error("create task", &error))?;
    Ok(Json(task))
}

/// `PATCH /tasks/{id}` — move a task to a new status.
pub(crate) async fn update_task_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state
        .service
        .update_status(TaskId::from_uuid(id), &body.status)
        .await
        .map_err(|error| map_error("update task status", &error))?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}` — delete a task, returning the deleted record.
pub(crate) async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state
        .service
        .delete_task(TaskId::from_uuid(id))
        .await
        .map_err(|error| map_error("delete task", &error))?;
    Ok(Json(task))
}
