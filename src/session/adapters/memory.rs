//! Provider that answers every authorization with a preset outcome.

use async_trait::async_trait;

use crate::session::{
    domain::ExternalIdentity,
    ports::{AuthProvider, AuthProviderError, AuthProviderResult},
};

/// External provider returning the same configured result every time.
///
/// Stands in for a real OAuth2 flow in the terminal shell and in tests.
#[derive(Debug, Clone)]
pub struct StaticAuthProvider {
    outcome: Result<ExternalIdentity, AuthProviderError>,
}

impl StaticAuthProvider {
    /// Creates a provider that always grants the given identity.
    #[must_use]
    pub const fn granting(identity: ExternalIdentity) -> Self {
        Self {
            outcome: Ok(identity),
        }
    }

    /// Creates a provider that always fails with the given error.
    #[must_use]
    pub const fn failing(error: AuthProviderError) -> Self {
        Self { outcome: Err(error) }
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn authorize(&self) -> AuthProviderResult<ExternalIdentity> {
        self.outcome.clone()
    }
}
