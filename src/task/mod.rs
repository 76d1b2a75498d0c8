//! Task list management for the to-do application.
//!
//! This module holds the in-memory task list shown once a user has signed
//! in: adding tasks at the front of the list, deleting them by identifier,
//! and listing them newest-first. Tasks are immutable once created. The
//! module follows hexagonal architecture:
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
