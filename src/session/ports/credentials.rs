//! Credential verification port.

/// Checks an email and password pair.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when the pair is accepted.
    ///
    /// Both values are compared exactly as entered.
    fn verify(&self, email: &str, password: &str) -> bool;
}
