//! Board view derivation: search, filters, sort, and column partition.
//!
//! The displayed list is the full task list filtered by a case-insensitive
//! search over title and description, a status filter, and a priority
//! filter, then sorted by the selected key and partitioned into the three
//! fixed status columns.

use serde::{Deserialize, Serialize};

use crate::task::domain::{Task, TaskPriority, TaskStatus};

/// Filter value representing "no filter".
const ALL: &str = "ALL";

/// Raw query parameters accepted by the board page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardQuery {
    /// Free-text search term.
    pub search: Option<String>,
    /// Status filter value, one of the statuses or `ALL`.
    pub status: Option<String>,
    /// Priority filter value, one of the priorities or `ALL`.
    pub priority: Option<String>,
    /// Sort key: `dueDate`, `priority`, or `status`.
    pub sort: Option<String>,
    /// Transient flash message from a failed mutation.
    pub error: Option<String>,
}

/// Sort key for the visible task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Earliest due date first, undated tasks last.
    #[default]
    DueDate,
    /// Highest priority first.
    Priority,
    /// Board-column order: pending, in progress, completed.
    Status,
}

impl SortKey {
    /// Returns the query-parameter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }

    /// Parses a raw sort value, falling back to the default for unknown
    /// input.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("priority") => Self::Priority,
            Some("status") => Self::Status,
            _ => Self::DueDate,
        }
    }
}

/// Resolved view state for one board render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilters {
    /// Free-text search term; empty matches everything.
    pub search: String,
    /// Status filter; `None` shows all statuses.
    pub status: Option<TaskStatus>,
    /// Priority filter; `None` shows all priorities.
    pub priority: Option<TaskPriority>,
    /// Active sort key.
    pub sort: SortKey,
}

impl BoardFilters {
    /// Resolves raw query parameters into typed view state.
    ///
    /// Unknown filter and sort values fall back to "all" / the default sort
    /// rather than failing the page render.
    #[must_use]
    pub fn from_query(query: &BoardQuery) -> Self {
        Self {
            search: query.search.clone().unwrap_or_default(),
            status: query
                .status
                .as_deref()
                .and_then(|value| TaskStatus::try_from(value).ok()),
            priority: query
                .priority
                .as_deref()
                .and_then(|value| TaskPriority::try_from(value).ok()),
            sort: SortKey::parse(query.sort.as_deref()),
        }
    }

    /// Returns true when the task passes the search term and both filters.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let search_hit = task.title().as_str().to_lowercase().contains(&needle)
            || task
                .description()
                .is_some_and(|text| text.to_lowercase().contains(&needle));
        let status_hit = self.status.is_none_or(|status| task.status() == status);
        let priority_hit = self
            .priority
            .is_none_or(|priority| task.priority() == priority);
        search_hit && status_hit && priority_hit
    }
}

/// Sorts tasks in place by the given key.
///
/// The sort is stable, so ties keep the underlying newest-first order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::DueDate => tasks.sort_by(|a, b| match (a.due_date(), b.due_date()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
        SortKey::Priority => tasks.sort_by(|a, b| b.priority().cmp(&a.priority())),
        SortKey::Status => tasks.sort_by_key(Task::status),
    }
}

/// Dropdown option rendered by the template.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    /// Canonical value submitted by the form.
    pub value: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// One status column of the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    /// Canonical status value of the column.
    pub status: &'static str,
    /// Column heading.
    pub title: &'static str,
    /// Number of visible tasks in the column.
    pub count: usize,
    /// Visible tasks, in sorted order.
    pub tasks: Vec<Task>,
}

/// Template context for one board render.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    /// Total number of tasks before filtering.
    pub total: usize,
    /// Echoed search term.
    pub search: String,
    /// Selected status filter value, or `ALL`.
    pub status_filter: String,
    /// Selected priority filter value, or `ALL`.
    pub priority_filter: String,
    /// Selected sort key value.
    pub sort: &'static str,
    /// Transient flash message from a failed mutation.
    pub error: Option<String>,
    /// The three status columns in board order.
    pub columns: Vec<BoardColumn>,
    /// Status dropdown options.
    pub status_options: Vec<SelectOption>,
    /// Priority dropdown options.
    pub priority_options: Vec<SelectOption>,
    /// Sort dropdown options.
    pub sort_options: Vec<SelectOption>,
}

impl BoardView {
    /// Derives the board view from the full task list and resolved filters.
    #[must_use]
    pub fn build(tasks: Vec<Task>, filters: &BoardFilters, error: Option<&str>) -> Self {
        let total = tasks.len();
        let mut visible: Vec<Task> = tasks
            .into_iter()
            .filter(|task| filters.matches(task))
            .collect();
        sort_tasks(&mut visible, filters.sort);

        let columns = TaskStatus::ALL
            .iter()
            .map(|&status| {
                let tasks: Vec<Task> = visible
                    .iter()
                    .filter(|task| task.status() == status)
                    .cloned()
                    .collect();
                BoardColumn {
                    status: status.as_str(),
                    title: status.label(),
                    count: tasks.len(),
                    tasks,
                }
            })
            .collect();

        Self {
            total,
            search: filters.search.clone(),
            status_filter: filters
                .status
                .map_or_else(|| ALL.to_owned(), |status| status.as_str().to_owned()),
            priority_filter: filters
                .priority
                .map_or_else(|| ALL.to_owned(), |priority| priority.as_str().to_owned()),
            sort: filters.sort.as_str(),
            error: error.map(ToOwned::to_owned),
            columns,
            status_options: TaskStatus::ALL
                .iter()
                .map(|&status| SelectOption {
                    value: status.as_str(),
                    label: status.label(),
                })
                .collect(),
            priority_options: TaskPriority::ALL
                .iter()
                .map(|&priority| SelectOption {
                    value: priority.as_str(),
                    label: priority.label(),
                })
                .collect(),
            sort_options: vec![
                SelectOption {
                    value: SortKey::DueDate.as_str(),
                    label: "Sort by Due Date",
                },
                SelectOption {
                    value: SortKey::Priority.as_str(),
                    label: "Sort by Priority",
                },
                SelectOption {
                    value: SortKey::Status.as_str(),
                    label: "Sort by Status",
                },
            ],
        }
    }
}
