//! In-memory adapters. Nothing here outlives the process.

mod task;

pub use task::InMemoryTaskRepository;
