//! Service layer holding the current session.
//!
//! [`SessionService`] owns the [`Session`] and is the only place it changes:
//! password login, external-provider login and logout.

use crate::session::{
    domain::{AuthMethod, EmailAddress, ExternalIdentity, Session, SessionDomainError},
    ports::{AuthProvider, AuthProviderError, AuthProviderResult, CredentialVerifier},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Message shown on the login screen when the credentials are rejected.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The email/password pair was rejected.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The external provider did not authorize the user.
    #[error(transparent)]
    Provider(#[from] AuthProviderError),

    /// The external provider authorized a user without sharing an email.
    #[error("external identity did not include an email address")]
    MissingIdentityEmail,

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SessionDomainError),
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session orchestration service.
pub struct SessionService<V, P, C>
where
    V: CredentialVerifier,
    P: AuthProvider,
    C: Clock + Send + Sync,
{
    verifier: Arc<V>,
    provider: Arc<P>,
    clock: Arc<C>,
    session: Session,
}

impl<V, P, C> SessionService<V, P, C>
where
    V: CredentialVerifier,
    P: AuthProvider,
    C: Clock + Send + Sync,
{
    /// Creates a service with an anonymous session.
    #[must_use]
    pub const fn new(verifier: Arc<V>, provider: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            verifier,
            provider,
            clock,
            session: Session::Anonymous,
        }
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Signs in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] when the verifier rejects
    /// the pair, or [`SessionError::Domain`] when the accepted email is not a
    /// valid address. The session is unchanged on error.
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<&Session> {
        if !self.verifier.verify(email, password) {
            tracing::warn!("login rejected: invalid credentials");
            return Err(SessionError::InvalidCredentials);
        }

        let address = EmailAddress::new(email)?;
        tracing::info!(email = %address, "signed in with password");
        self.session.sign_in(address, AuthMethod::Password, &*self.clock);
        Ok(&self.session)
    }

    /// Returns the external authorization provider.
    ///
    /// Callers that must stay responsive while the flow runs await
    /// [`AuthProvider::authorize`] on this handle and pass the outcome to
    /// [`SessionService::complete_external_login`].
    #[must_use]
    pub fn auth_provider(&self) -> Arc<P> {
        Arc::clone(&self.provider)
    }

    /// Signs in through the external authorization provider.
    ///
    /// Holds the service until the provider answers.
    ///
    /// # Errors
    ///
    /// See [`SessionService::complete_external_login`].
    pub async fn login_with_provider(&mut self) -> SessionResult<&Session> {
        let outcome = self.provider.authorize().await;
        self.complete_external_login(outcome)
    }

    /// Applies the outcome of an external authorization flow.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Provider`] when the provider failed and
    /// [`SessionError::MissingIdentityEmail`] when the identity it returned
    /// carries no email address. The session is unchanged on error.
    pub fn complete_external_login(
        &mut self,
        outcome: AuthProviderResult<ExternalIdentity>,
    ) -> SessionResult<&Session> {
        let identity = outcome.inspect_err(|err| {
            tracing::warn!(error = %err, "external sign-in failed");
        })?;

        let Some(address) = identity.email().cloned() else {
            tracing::warn!("external sign-in returned no email address");
            return Err(SessionError::MissingIdentityEmail);
        };

        tracing::info!(email = %address, "signed in with external provider");
        self.session.sign_in(address, AuthMethod::ExternalProvider, &*self.clock);
        Ok(&self.session)
    }

    /// Signs out. Calling this while anonymous has no effect.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            tracing::info!(email = %user.email(), "signed out");
        }
        self.session.sign_out();
    }
}
