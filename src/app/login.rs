//! Login screen view model.

use crate::session::services::SessionError;

/// Inputs and inline message of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginScreen {
    email: String,
    password: String,
    message: Option<String>,
}

impl LoginScreen {
    /// Creates an empty login screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the email input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the password input.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Returns the email input.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password input.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the inline message, if one is shown.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Shows a failed sign-in attempt under the inputs.
    pub(crate) fn show_error(&mut self, err: &SessionError) {
        self.message = Some(err.to_string());
    }
}
