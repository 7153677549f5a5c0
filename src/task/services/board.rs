//! Service layer for task board operations.
//!
//! Both transport surfaces (the JSON API and the server-rendered board
//! forms) call this one service, so validation and defaulting behaviour
//! cannot diverge between them.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Enumerated fields arrive as raw strings from the transports and are
/// validated here through the domain constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title field.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority as a raw string.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date as a raw `YYYY-MM-DD` string.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskBoardError {
    /// Returns true when the error targets a nonexistent task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }

    /// Returns true when the error is a validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store is unavailable.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Creates a new task.
    ///
    /// Defaults the priority to [`TaskPriority::Medium`] when unspecified
    /// and forces the status to pending regardless of caller input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title is empty or the
    /// priority or due date cannot be parsed, and
    /// [`TaskBoardError::Repository`] when persistence fails. Nothing is
    /// persisted on validation failure.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let priority = parse_priority(request.priority.as_deref())?;
        let due_date = parse_due_date(request.due_date.as_deref())?;
        let description = request.description.filter(|text| !text.trim().is_empty());

        let task = Task::create(
            NewTask {
                title,
                description,
                priority,
                due_date,
            },
            &*self.clock,
        );
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Moves a task to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the status value is not one
    /// of the enumerated statuses and [`TaskBoardError::Repository`] when
    /// the task does not exist or persistence fails.
    pub async fn update_status(&self, id: TaskId, status: &str) -> TaskBoardResult<Task> {
        let status = TaskStatus::try_from(status).map_err(TaskDomainError::from)?;
        Ok(self.repository.update_status(id, status).await?)
    }

    /// Deletes a task and returns the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task does not exist
    /// or persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<Task> {
        Ok(self.repository.delete(id).await?)
    }
}

/// Parses an optional raw priority, defaulting to medium.
///
/// Blank values are treated as absent so HTML form posts with an empty
/// select do not fail validation.
fn parse_priority(raw: Option<&str>) -> Result<TaskPriority, TaskDomainError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(TaskPriority::try_from(value)?),
        None => Ok(TaskPriority::default()),
    }
}

/// Parses an optional raw `YYYY-MM-DD` due date. Blank values are absent.
fn parse_due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, TaskDomainError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned())),
        None => Ok(None),
    }
}
