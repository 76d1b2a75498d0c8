//! Domain model for the task list.
//!
//! Tasks carry a validated title, a free-form description, a calendar due
//! date and a priority. Storage concerns stay outside the domain boundary.

mod error;
mod ids;
mod priority;
mod task;
mod title;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{NewTask, Task};
pub use title::TaskTitle;
