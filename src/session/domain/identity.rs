//! Identity returned by an external authorization provider.

use super::{EmailAddress, SessionDomainError};
use std::fmt;

/// Opaque token issued by an external provider.
///
/// The token is never inspected and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Wraps a provider token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::EmptyIdentityToken`] when the token is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, SessionDomainError> {
        let token = value.into();
        if token.is_empty() {
            return Err(SessionDomainError::EmptyIdentityToken);
        }
        Ok(Self(token))
    }

    /// Returns the raw token for handing back to the provider.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityToken(<redacted>)")
    }
}

/// Result of a successful external authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    token: IdentityToken,
    email: Option<EmailAddress>,
}

impl ExternalIdentity {
    /// Creates an identity carrying only the provider token.
    #[must_use]
    pub const fn new(token: IdentityToken) -> Self {
        Self { token, email: None }
    }

    /// Attaches the email address the provider vouched for.
    #[must_use]
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Returns the provider token.
    #[must_use]
    pub const fn token(&self) -> &IdentityToken {
        &self.token
    }

    /// Returns the email address, if the provider shared one.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }
}
