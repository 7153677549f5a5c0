//! Domain model for task tracking.
//!
//! The task domain models a single work-item aggregate with a validated
//! title, a priority tag, an optional due date, and a three-stage lifecycle
//! status, keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{NewTask, PersistedTaskData, Task, TaskPriority, TaskStatus};
