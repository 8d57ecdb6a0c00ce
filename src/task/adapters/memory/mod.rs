//! In-memory task persistence adapters.

mod task;

pub use task::InMemoryTaskRepository;
