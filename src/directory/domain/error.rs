//! Error types for directory domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The department is empty after trimming.
    #[error("department must not be empty")]
    EmptyDepartment,

    /// The department exceeds the 100-character storage limit.
    #[error("department exceeds 100 character limit: {0}")]
    DepartmentTooLong(String),

    /// The position is empty after trimming.
    #[error("position must not be empty")]
    EmptyPosition,

    /// The position exceeds the 100-character storage limit.
    #[error("position exceeds 100 character limit: {0}")]
    PositionTooLong(String),

    /// The phone number is empty after trimming.
    #[error("phone number must not be empty")]
    EmptyPhone,

    /// The phone number exceeds the 30-character storage limit.
    #[error("phone number exceeds 30 character limit: {0}")]
    PhoneTooLong(String),
}

/// Error returned while parsing an employment status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown employee status: {0}")]
pub struct ParseEmployeeStatusError(pub String);
