//! Domain model for employee records.
//!
//! Employees are directory entries, not accounts: they carry contact and
//! organisational details plus an employment status. Login identity lives in
//! the identity module; the two are linked only informally through email
//! addresses.

mod employee;
mod error;
mod ids;
mod profile;
mod status;

pub use employee::{Employee, PersistedEmployeeData};
pub use error::{DirectoryDomainError, ParseEmployeeStatusError};
pub use ids::EmployeeId;
pub use profile::EmployeeProfile;
pub use status::EmployeeStatus;
