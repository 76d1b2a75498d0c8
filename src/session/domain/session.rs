//! Session state and its transitions.

use super::EmailAddress;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an authenticated session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Email and password.
    Password,
    /// An external authorization provider.
    ExternalProvider,
}

impl AuthMethod {
    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::ExternalProvider => "external_provider",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user behind an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    email: EmailAddress,
    method: AuthMethod,
    authenticated_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    /// Returns the user's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns how the user signed in.
    #[must_use]
    pub const fn method(&self) -> AuthMethod {
        self.method
    }

    /// Returns when the user signed in.
    #[must_use]
    pub const fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}

/// Authentication status of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// A user is signed in.
    Authenticated(AuthenticatedUser),
}

impl Session {
    /// Returns `true` when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns the signed-in email, or an empty string when anonymous.
    #[must_use]
    pub fn email(&self) -> &str {
        self.user().map_or("", |user| user.email().as_str())
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// Marks the session as authenticated, replacing any previous user.
    pub fn sign_in(&mut self, email: EmailAddress, method: AuthMethod, clock: &impl Clock) {
        *self = Self::Authenticated(AuthenticatedUser {
            email,
            method,
            authenticated_at: clock.utc(),
        });
    }

    /// Returns the session to the anonymous state.
    pub fn sign_out(&mut self) {
        *self = Self::Anonymous;
    }
}
