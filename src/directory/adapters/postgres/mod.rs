//! `PostgreSQL` adapters for the directory ports.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{EmployeePgPool, PostgresEmployeeRepository};
