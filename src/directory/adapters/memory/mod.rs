//! In-memory adapters for the directory ports.

mod employee;

pub use employee::InMemoryEmployeeRepository;
