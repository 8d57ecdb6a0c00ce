//! `PostgreSQL` adapters for the task ports.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
