//! Adapter implementations of the task ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskRepository;
pub use postgres::{PostgresTaskRepository, TaskPgPool};
