//! Adapter implementations of the directory ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEmployeeRepository;
pub use postgres::{EmployeePgPool, PostgresEmployeeRepository};
