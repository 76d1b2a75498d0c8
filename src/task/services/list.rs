//! Service layer for adding, deleting and listing tasks.

use crate::task::{
    domain::{NewTask, Priority, Task, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a task from the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl AddTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskListError {
    /// Returns `true` when the request was rejected for an empty title.
    #[must_use]
    pub const fn is_empty_title(&self) -> bool {
        matches!(self, Self::Domain(TaskDomainError::EmptyTaskTitle))
    }
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Task list orchestration service.
pub struct TaskListService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Adds a task at the front of the list.
    ///
    /// Missing optional fields take their defaults: an empty description,
    /// today's date and [`Priority::Medium`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Domain`] when the trimmed title is empty, in
    /// which case the list is left unchanged, or
    /// [`TaskListError::Repository`] when the list rejects the insert.
    pub fn add_task(&self, request: AddTaskRequest) -> TaskListResult<Task> {
        let AddTaskRequest {
            title,
            description,
            due_date,
            priority,
        } = request;

        let mut new_task = NewTask::new(TaskTitle::new(title)?);
        if let Some(text) = description {
            new_task = new_task.with_description(text);
        }
        if let Some(date) = due_date {
            new_task = new_task.with_due_date(date);
        }
        if let Some(level) = priority {
            new_task = new_task.with_priority(level);
        }

        let task = Task::create(new_task, &*self.clock);
        self.repository.prepend(&task)?;
        tracing::debug!(task_id = %task.id(), title = %task.title(), "task added");
        Ok(task)
    }

    /// Deletes the task with the given identifier.
    ///
    /// Returns the removed task, or `Ok(None)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when the list cannot be read or
    /// written.
    pub fn delete_task(&self, id: TaskId) -> TaskListResult<Option<Task>> {
        let removed = self.repository.remove(id)?;
        if removed.is_some() {
            tracing::debug!(task_id = %id, "task deleted");
        }
        Ok(removed)
    }

    /// Returns the current tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when the list cannot be read.
    pub fn list_tasks(&self) -> TaskListResult<Vec<Task>> {
        Ok(self.repository.list()?)
    }

    /// Returns the clock used for creation timestamps and default dates.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
