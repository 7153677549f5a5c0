//! Shared application state for HTTP handlers.

use crate::task::{ports::TaskRepository, services::TaskBoardService};
use mockable::Clock;
use std::sync::Arc;

/// Shared application dependencies handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task board service used by both transport surfaces.
    pub service: Arc<TaskBoardService<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates new application state around a board service.
    #[must_use]
    pub const fn new(service: Arc<TaskBoardService<R, C>>) -> Self {
        Self { service }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
