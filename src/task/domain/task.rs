//! Task record and its creation parameters.

use super::{Priority, TaskId, TaskTitle};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Display format for due dates, e.g. `Sun Oct 18 2026`.
const DUE_DATE_FORMAT: &str = "%a %b %d %Y";

/// Validated input for a task that has not been added to a list yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
}

impl NewTask {
    /// Creates task input with the required title and default optional
    /// fields.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: String::new(),
            due_date: None,
            priority: Priority::Medium,
        }
    }

    /// Sets the description, kept as entered.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the due date. Without one the task is due on its creation date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// A to-do item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    due_date: NaiveDate,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh identifier.
    ///
    /// A missing due date defaults to the clock's local calendar date.
    #[must_use]
    pub fn create(new_task: NewTask, clock: &impl Clock) -> Self {
        let NewTask {
            title,
            description,
            due_date,
            priority,
        } = new_task;

        Self {
            id: TaskId::new(),
            title,
            description,
            due_date: due_date.unwrap_or_else(|| clock.local().date_naive()),
            priority,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the due date in short display form.
    #[must_use]
    pub fn due_date_label(&self) -> String {
        self.due_date.format(DUE_DATE_FORMAT).to_string()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
