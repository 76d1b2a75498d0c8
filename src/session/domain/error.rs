//! Error types for session domain validation.

use thiserror::Error;

/// Errors returned while constructing session domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The identity token is empty.
    #[error("identity token must not be empty")]
    EmptyIdentityToken,
}
