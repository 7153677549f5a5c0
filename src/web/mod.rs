//! HTTP transport for the task board.
//!
//! Two surfaces share one service layer:
//!
//! - a JSON API under `/tasks` in [`api`]
//! - a server-rendered board page with form actions in [`pages`]
//!
//! Both perform identical task store mutations; neither carries its own
//! validation or defaulting logic.

mod api;
mod board;
mod pages;
mod state;

pub use board::{BoardColumn, BoardFilters, BoardQuery, BoardView, SelectOption, SortKey};
pub use state::AppState;

use axum::Router;
use axum::routing::{get, patch, post};
use mockable::Clock;

use crate::task::ports::TaskRepository;

/// Builds the application router with both transport surfaces attached.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(pages::show_board::<R, C>))
        .route("/board/tasks", post(pages::create_task::<R, C>))
        .route(
            "/board/tasks/{id}/status",
            post(pages::update_task_status::<R, C>),
        )
        .route("/board/tasks/{id}/delete", post(pages::delete_task::<R, C>))
        .route(
            "/tasks",
            get(api::list_tasks::<R, C>).post(api::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            patch(api::update_task_status::<R, C>).delete(api::delete_task::<R, C>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests;
