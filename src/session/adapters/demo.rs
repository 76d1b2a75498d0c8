//! Hardcoded demo credential check.
//!
//! This is a stub for demonstrations: one email/password pair, compared in
//! plain text, with no rate limiting.

use crate::session::ports::CredentialVerifier;

/// Email accepted by the demo login.
pub const DEMO_EMAIL: &str = "demo@example.com";

/// Password accepted by the demo login.
pub const DEMO_PASSWORD: &str = "password123";

/// The single email/password pair accepted by [`DemoCredentialVerifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    /// Accepted email, compared exactly.
    pub email: String,
    /// Accepted password, compared exactly.
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: DEMO_EMAIL.to_owned(),
            password: DEMO_PASSWORD.to_owned(),
        }
    }
}

/// Verifier accepting exactly one configured credential pair.
#[derive(Debug, Clone, Default)]
pub struct DemoCredentialVerifier {
    credentials: DemoCredentials,
}

impl DemoCredentialVerifier {
    /// Creates a verifier accepting the default demo pair.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a verifier accepting the given pair.
    #[must_use]
    pub const fn with_credentials(credentials: DemoCredentials) -> Self {
        Self { credentials }
    }
}

impl CredentialVerifier for DemoCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool {
        email == self.credentials.email && password == self.credentials.password
    }
}
