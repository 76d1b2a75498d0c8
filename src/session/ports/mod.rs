//! Port contracts for signing in.
//!
//! The session service checks passwords through a [`CredentialVerifier`]
//! and delegates third-party sign-in to an [`AuthProvider`].

pub mod auth_provider;
pub mod credentials;

pub use auth_provider::{AuthProvider, AuthProviderError, AuthProviderResult};
pub use credentials::CredentialVerifier;
