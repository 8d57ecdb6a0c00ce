//! Organisational profile for an employee.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};

/// Maximum length for department and position, matching `VARCHAR(100)`.
const MAX_FIELD_LENGTH: usize = 100;

/// Maximum length for a phone number, matching `VARCHAR(30)`.
const MAX_PHONE_LENGTH: usize = 30;

/// Organisational details of an employee: department, position, and phone.
///
/// Bundled as one value object because the fields change together during
/// directory maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    department: String,
    position: String,
    phone: String,
}

impl EmployeeProfile {
    /// Creates a validated employee profile.
    ///
    /// All fields are trimmed. Empty values after trimming are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDepartment`],
    /// [`DirectoryDomainError::EmptyPosition`], or
    /// [`DirectoryDomainError::EmptyPhone`] when the corresponding field is
    /// blank, and the matching `TooLong` variant when a field exceeds its
    /// storage column width.
    pub fn new(
        raw_department: impl Into<String>,
        raw_position: impl Into<String>,
        raw_phone: impl Into<String>,
    ) -> Result<Self, DirectoryDomainError> {
        let department = raw_department.into().trim().to_owned();
        let position = raw_position.into().trim().to_owned();
        let phone = raw_phone.into().trim().to_owned();

        if department.is_empty() {
            return Err(DirectoryDomainError::EmptyDepartment);
        }
        if department.len() > MAX_FIELD_LENGTH {
            return Err(DirectoryDomainError::DepartmentTooLong(department));
        }
        if position.is_empty() {
            return Err(DirectoryDomainError::EmptyPosition);
        }
        if position.len() > MAX_FIELD_LENGTH {
            return Err(DirectoryDomainError::PositionTooLong(position));
        }
        if phone.is_empty() {
            return Err(DirectoryDomainError::EmptyPhone);
        }
        if phone.len() > MAX_PHONE_LENGTH {
            return Err(DirectoryDomainError::PhoneTooLong(phone));
        }

        Ok(Self {
            department,
            position,
            phone,
        })
    }

    /// Returns the department name.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the position title.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}
