//! Port traits for the directory module.

pub mod repository;

pub use repository::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult};
