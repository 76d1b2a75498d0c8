//! Task list screen view model.

use super::form::TaskForm;
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{TaskListResult, TaskListService},
};
use mockable::Clock;
use std::sync::Arc;

/// Text shown in place of the list when it is empty.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No tasks yet. Add one!";

/// The signed-in user's task list together with the add-task form.
///
/// Every mount starts from an empty list; dropping the screen discards it.
pub struct TaskScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    user_email: String,
    tasks: TaskListService<R, C>,
    form: TaskForm,
}

impl<R, C> TaskScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Mounts the screen over the given list for the signed-in user.
    #[must_use]
    pub fn mount(user_email: impl Into<String>, repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            user_email: user_email.into(),
            tasks: TaskListService::new(repository, clock),
            form: TaskForm::Closed,
        }
    }

    /// Returns the email shown in the header.
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Returns the header greeting.
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.user_email)
    }

    /// Returns the tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be read.
    pub fn tasks(&self) -> TaskListResult<Vec<Task>> {
        self.tasks.list_tasks()
    }

    /// Returns the underlying task list service.
    #[must_use]
    pub const fn service(&self) -> &TaskListService<R, C> {
        &self.tasks
    }

    /// Returns the add-task form.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the add-task form for editing its draft.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Opens the add-task form with a blank draft.
    pub fn open_form(&mut self) {
        self.form.open(self.tasks.clock());
    }

    /// Closes the add-task form without adding anything.
    pub fn cancel_form(&mut self) {
        self.form.close();
    }

    /// Saves the open draft as a new task.
    ///
    /// Returns the created task and closes the form. A blank title is
    /// ignored: nothing is added and the form stays open with the entered
    /// values. Saving while the form is closed does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error when the list rejects the new task.
    pub fn save_form(&mut self) -> TaskListResult<Option<Task>> {
        let Some(draft) = self.form.draft() else {
            return Ok(None);
        };

        match self.tasks.add_task(draft.to_request()) {
            Ok(task) => {
                self.form.close();
                Ok(Some(task))
            }
            Err(err) if err.is_empty_title() => {
                tracing::debug!("ignored save with blank task title");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes a task. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be updated.
    pub fn delete_task(&self, id: TaskId) -> TaskListResult<Option<Task>> {
        self.tasks.delete_task(id)
    }
}
