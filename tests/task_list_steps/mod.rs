//! Step definitions for task list BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
