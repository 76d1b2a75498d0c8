//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty or whitespace only.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The value is not a valid task identifier.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),
}

/// Error returned while parsing a task priority from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority '{0}', expected low, medium, or high")]
pub struct ParsePriorityError(pub String);
