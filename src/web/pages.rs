//! Server-rendered board page and its form actions.
//!
//! Every mutation goes through the same board service as the JSON API and
//! triggers a full reload by redirecting back to `/`. Failures redirect
//! with a transient `?error=` flash message; there is no retry.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::{Environment, context};
use mockable::Clock;
use serde::Deserialize;
use uuid::Uuid;

use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskBoardError},
};

use super::board::{BoardFilters, BoardQuery, BoardView};
use super::state::AppState;

const BOARD_TEMPLATE: &str = include_str!("templates/board.html");

/// Error response for the page surface, rendered as minimal HTML rather
/// than the JSON API's error shape.
#[derive(Debug)]
pub(crate) struct PageError {
    status: StatusCode,
    message: &'static str,
}

impl PageError {
    const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = format!(
            "<!doctype html>\n<html><head><title>Task Board</title></head>\
             <body><h1>{}</h1></body></html>",
            self.message
        );
        (self.status, Html(body)).into_response()
    }
}

/// Form body for creating a task from the board page.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateTaskForm {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default, rename = "dueDate")]
    due_date: Option<String>,
}

/// Form body for moving a task to a new status.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateStatusForm {
    status: String,
}

/// `GET /` — render the board.
pub(crate) async fn show_board<R, C>(
    State(state): State<AppState<R, C>>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, PageError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service.list_tasks().await.map_err(|error| {
        tracing::error!(error = %error, "board listing failed");
        PageError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load tasks")
    })?;
    let filters = BoardFilters::from_query(&query);
    let view = BoardView::build(tasks, &filters, query.error.as_deref());
    let html = render_board(&view).map_err(|error| {
        tracing::error!(error = %error, "board template rendering failed");
        PageError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render board")
    })?;
    Ok(Html(html))
}

/// `POST /board/tasks` — create a task and reload the board.
pub(crate) async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    axum::Form(form): axum::Form<CreateTaskForm>,
) -> Redirect
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let mut request = CreateTaskRequest::new(form.title);
    if let Some(description) = form.description {
        request = request.with_description(description);
    }
    if let Some(priority) = form.priority {
        request = request.with_priority(priority);
    }
    if let Some(due_date) = form.due_date {
        request = request.with_due_date(due_date);
    }

    match state.service.create_task(request).await {
        Ok(_) => Redirect::to("/"),
        Err(error) => redirect_with_flash("Failed to create task", &error),
    }
}

/// `POST /board/tasks/{id}/status` — move a task and reload the board.
pub(crate) async fn update_task_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<Uuid>,
    axum::Form(form): axum::Form<UpdateStatusForm>,
) -> Redirect
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    match state
        .service
        .update_status(TaskId::from_uuid(id), &form.status)
        .await
    {
        Ok(_) => Redirect::to("/"),
        Err(error) => redirect_with_flash("Failed to update task status", &error),
    }
}

/// `POST /board/tasks/{id}/delete` — delete a task and reload the board.
pub(crate) async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<Uuid>,
) -> Redirect
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    match state.service.delete_task(TaskId::from_uuid(id)).await {
        Ok(_) => Redirect::to("/"),
        Err(error) => redirect_with_flash("Failed to delete task", &error),
    }
}

/// Redirects back to the board with a flash message naming the failed
/// action.
///
/// Messages are fixed ASCII phrases, so encoding spaces as `+` is the only
/// escaping the query string needs.
fn redirect_with_flash(message: &str, error: &TaskBoardError) -> Redirect {
    if error.is_not_found() || error.is_validation() {
        tracing::debug!(error = %error, "board mutation rejected");
    } else {
        tracing::error!(error = %error, "board mutation failed");
    }
    let encoded = message.replace(' ', "+");
    Redirect::to(&format!("/?error={encoded}"))
}

/// Renders the board template with the derived view.
///
/// The template is registered under an `.html` name so minijinja applies
/// HTML auto-escaping to task titles and descriptions.
fn render_board(view: &BoardView) -> Result<String, minijinja::Error> {
    let mut environment = Environment::new();
    environment.add_template("board.html", BOARD_TEMPLATE)?;
    environment
        .get_template("board.html")?
        .render(context! { board => view })
}
