//! In-memory task list used by every mounted task screen.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task list, newest task first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl TaskRepository for InMemoryTaskRepository {
    fn prepend(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        if tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(0, task.clone());
        Ok(())
    }

    fn remove(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        let removed = tasks
            .iter()
            .position(|task| task.id() == id)
            .map(|index| tasks.remove(index));
        Ok(removed)
    }

    fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.clone())
    }
}

#[cfg(test)]
impl InMemoryTaskRepository {
    /// Poisons the list lock by panicking on another thread while holding
    /// it.
    pub(crate) fn poison(&self) {
        let state = Arc::clone(&self.state);
        let _joined = std::thread::spawn(move || {
            let _guard = state.write();
            panic!("task list writer panicked");
        })
        .join();
    }
}
