//! Service layer for the employee directory.

mod directory;

pub use directory::{
    CreateEmployeeRequest, DirectoryError, DirectoryResult, EmployeeDirectoryService,
    UpdateEmployeeRequest,
};
