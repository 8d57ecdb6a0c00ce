//! Service layer for employee directory maintenance.
//!
//! Provides [`EmployeeDirectoryService`] which coordinates employee record
//! creation, lookup, updates, and removal.

use crate::directory::{
    domain::{DirectoryDomainError, Employee, EmployeeId, EmployeeProfile, EmployeeStatus},
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::identity::domain::{DisplayName, EmailAddress, IdentityDomainError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for adding an employee to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeRequest {
    name: String,
    email: String,
    department: String,
    position: String,
    phone: String,
    status: Option<EmployeeStatus>,
}

impl CreateEmployeeRequest {
    /// Creates a request with the mandatory directory fields.
    ///
    /// The employment status defaults to `Active` unless overridden with
    /// [`Self::with_status`].
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
            position: position.into(),
            phone: phone.into(),
            status: None,
        }
    }

    /// Sets an explicit initial employment status.
    #[must_use]
    pub const fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for partially updating an employee record.
///
/// Every field is optional; absent fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateEmployeeRequest {
    name: Option<String>,
    email: Option<String>,
    department: Option<String>,
    position: Option<String>,
    phone: Option<String>,
    status: Option<EmployeeStatus>,
}

impl UpdateEmployeeRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the employee name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the contact email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replaces the department name.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Replaces the position title.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Replaces the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Replaces the employment status.
    #[must_use]
    pub const fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),

    /// The display name or email address failed validation.
    #[error(transparent)]
    Identity(#[from] IdentityDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
}

/// Result type for directory service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Employee directory maintenance service.
#[derive(Clone)]
pub struct EmployeeDirectoryService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    employees: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> EmployeeDirectoryService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(employees: Arc<R>, clock: Arc<C>) -> Self {
        Self { employees, clock }
    }

    /// Adds a new employee to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Identity`] when the name or email fail
    /// validation, [`DirectoryError::Domain`] when the profile fields fail
    /// validation, or [`DirectoryError::Repository`] when the email address
    /// is already on record or persistence fails.
    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> DirectoryResult<Employee> {
        let CreateEmployeeRequest {
            name,
            email,
            department,
            position,
            phone,
            status,
        } = request;

        let parsed_name = DisplayName::new(name)?;
        let parsed_email = EmailAddress::new(email)?;
        let profile = EmployeeProfile::new(department, position, phone)?;

        let employee = Employee::new(
            parsed_name,
            parsed_email,
            profile,
            status.unwrap_or(EmployeeStatus::Active),
            &*self.clock,
        );
        self.employees.store(&employee).await?;

        info!(employee_id = %employee.id(), email = %employee.email(), "added employee record");
        Ok(employee)
    }

    /// Fetches an employee record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the employee is not found
    /// or persistence lookup fails.
    pub async fn get_employee(&self, id: EmployeeId) -> DirectoryResult<Employee> {
        self.find_by_id_or_error(id).await
    }

    /// Returns all employee records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when persistence lookup fails.
    pub async fn list_employees(&self) -> DirectoryResult<Vec<Employee>> {
        Ok(self.employees.list_all().await?)
    }

    /// Applies a partial update to an employee record.
    ///
    /// Absent fields keep their stored values. Profile fields (department,
    /// position, phone) merge individually against the stored profile.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Identity`] or [`DirectoryError::Domain`]
    /// when a replacement value fails validation, and
    /// [`DirectoryError::Repository`] when the employee is not found, the new
    /// email address is already on record, or persistence fails.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        request: UpdateEmployeeRequest,
    ) -> DirectoryResult<Employee> {
        let UpdateEmployeeRequest {
            name,
            email,
            department,
            position,
            phone,
            status,
        } = request;
        let mut employee = self.find_by_id_or_error(id).await?;

        if let Some(raw_name) = name {
            let parsed_name = DisplayName::new(raw_name)?;
            employee.rename(parsed_name, &*self.clock);
        }
        if let Some(raw_email) = email {
            let parsed_email = EmailAddress::new(raw_email)?;
            employee.change_email(parsed_email, &*self.clock);
        }
        if department.is_some() || position.is_some() || phone.is_some() {
            let current = employee.profile();
            let merged_department = department.unwrap_or_else(|| current.department().to_owned());
            let merged_position = position.unwrap_or_else(|| current.position().to_owned());
            let merged_phone = phone.unwrap_or_else(|| current.phone().to_owned());
            let profile = EmployeeProfile::new(merged_department, merged_position, merged_phone)?;
            employee.update_profile(profile, &*self.clock);
        }
        if let Some(new_status) = status {
            employee.change_status(new_status, &*self.clock);
        }

        self.employees.update(&employee).await?;

        info!(employee_id = %employee.id(), "updated employee record");
        Ok(employee)
    }

    /// Removes an employee record from the directory.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the employee is not found
    /// or persistence fails.
    pub async fn delete_employee(&self, id: EmployeeId) -> DirectoryResult<()> {
        self.employees.delete(id).await?;

        info!(employee_id = %id, "removed employee record");
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: EmployeeId) -> DirectoryResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmployeeRepositoryError::NotFound(id).into())
    }
}
