//! External authorization provider port.

use crate::session::domain::ExternalIdentity;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for external authorization.
pub type AuthProviderResult<T> = Result<T, AuthProviderError>;

/// Third-party sign-in capability, such as an OAuth2 authorization-code
/// flow.
///
/// An abandoned flow may never resolve; callers must not assume a
/// timeout.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Runs the authorization flow and returns the identity it produced.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::Denied`] when the user or provider
    /// refused access, [`AuthProviderError::Cancelled`] when the user backed
    /// out, or [`AuthProviderError::Provider`] for any other failure.
    async fn authorize(&self) -> AuthProviderResult<ExternalIdentity>;
}

/// Errors reported by external authorization providers.
#[derive(Debug, Clone, Error)]
pub enum AuthProviderError {
    /// Access was refused.
    #[error("authorization denied: {0}")]
    Denied(String),

    /// The user cancelled the flow.
    #[error("authorization cancelled")]
    Cancelled,

    /// The provider failed.
    #[error("authorization provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthProviderError {
    /// Wraps a provider failure.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
