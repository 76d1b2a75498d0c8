//! Application services for the task list.

mod list;

pub use list::{AddTaskRequest, TaskListError, TaskListResult, TaskListService};
