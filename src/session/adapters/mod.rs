//! Adapter implementations of the session ports.

mod demo;
mod memory;

pub use demo::{DEMO_EMAIL, DEMO_PASSWORD, DemoCredentialVerifier, DemoCredentials};
pub use memory::StaticAuthProvider;
