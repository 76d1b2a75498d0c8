//! Sign-in state for the to-do application.
//!
//! A session is either anonymous or authenticated with an email address.
//! Users sign in with the demo credentials or through an external
//! authorization provider, and signing out returns the session to the
//! anonymous state. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
