//! Repository port for employee record persistence.

use crate::directory::domain::{Employee, EmployeeId};
use crate::identity::domain::EmailAddress;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee repository operations.
pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

/// Employee record persistence contract.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee record.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::DuplicateEmployee`] when the record
    /// ID already exists or [`EmployeeRepositoryError::DuplicateEmail`] when
    /// the email address already belongs to another record.
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Persists changes to an existing employee record.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when the record does not
    /// exist, or [`EmployeeRepositoryError::DuplicateEmail`] when the update
    /// would take an email address already held by another record.
    async fn update(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Deletes an employee record.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: EmployeeId) -> EmployeeRepositoryResult<()>;

    /// Finds an employee record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Finds an employee record by email address.
    ///
    /// Returns `None` when no record has the given address.
    async fn find_by_email(&self, email: &EmailAddress)
    -> EmployeeRepositoryResult<Option<Employee>>;

    /// Returns all employee records, most recently created first.
    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>>;
}

/// Errors returned by employee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// A record with the same email address already exists.
    #[error("duplicate employee email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// The record was not found.
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
