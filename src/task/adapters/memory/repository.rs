//! In-memory repository for tests and local use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    // The sequence number breaks created-at ties so listing stays in strict
    // reverse-insertion order even when two tasks share a timestamp.
    tasks: HashMap<TaskId, (u64, Task)>,
    next_seq: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut entries: Vec<&(u64, Task)> = state.tasks.values().collect();
        entries.sort_by(|(seq_a, task_a), (seq_b, task_b)| {
            task_b
                .created_at()
                .cmp(&task_a.created_at())
                .then(seq_b.cmp(seq_a))
        });
        Ok(entries.into_iter().map(|(_, task)| task.clone()).collect())
    }

    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state.tasks.insert(task.id(), (seq, task.clone()));
        Ok(())
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let (_, task) = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.set_status(status);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let (_, task) = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(task)
    }
}
