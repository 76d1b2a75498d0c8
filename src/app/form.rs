//! Add-task form state machine.
//!
//! The form is either closed or open with a draft. Opening always starts
//! from a blank draft; closing, whether by cancel or by a successful save,
//! discards the draft.

use crate::task::{domain::Priority, services::AddTaskRequest};
use chrono::NaiveDate;
use mockable::Clock;

/// Values entered in the open form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title as typed, untrimmed.
    pub title: String,
    /// Description as typed.
    pub description: String,
    /// Date chosen in the date picker.
    pub due_date: NaiveDate,
    /// Level chosen in the priority picker.
    pub priority: Priority,
}

impl TaskDraft {
    /// Creates a blank draft due on `today` with medium priority.
    #[must_use]
    pub const fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: today,
            priority: Priority::Medium,
        }
    }

    /// Builds the add-task request for this draft.
    #[must_use]
    pub fn to_request(&self) -> AddTaskRequest {
        AddTaskRequest::new(self.title.clone())
            .with_description(self.description.clone())
            .with_due_date(self.due_date)
            .with_priority(self.priority)
    }
}

/// The add-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskForm {
    /// The form is hidden.
    #[default]
    Closed,
    /// The form is visible with the values entered so far.
    Open(TaskDraft),
}

impl TaskForm {
    /// Opens the form with a blank draft. Does nothing if already open.
    pub fn open(&mut self, clock: &impl Clock) {
        if self.is_open() {
            return;
        }
        *self = Self::Open(TaskDraft::blank(clock.local().date_naive()));
    }

    /// Closes the form, discarding the draft.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Returns `true` while the form is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns the draft while the form is open.
    #[must_use]
    pub const fn draft(&self) -> Option<&TaskDraft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) => Some(draft),
        }
    }

    /// Returns the draft for editing while the form is open.
    pub const fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) => Some(draft),
        }
    }
}
