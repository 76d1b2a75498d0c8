//! todolist: state core of a small to-do list application.
//!
//! A user signs in with the demo credentials or through an external
//! authorization provider, then adds, lists and deletes tasks. Nothing is
//! persisted: the task list lives only as long as the signed-in screen.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory list, demo
//!   credentials, preset authorization provider)
//!
//! # Modules
//!
//! - [`session`]: Sign-in state, password login and external-provider login
//! - [`task`]: The newest-first task list
//! - [`app`]: Screen view models and the state container tying them together

pub mod app;
pub mod session;
pub mod task;

#[cfg(test)]
mod test_support;
