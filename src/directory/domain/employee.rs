//! Employee record aggregate root.

use super::{EmployeeId, EmployeeProfile, EmployeeStatus};
use crate::identity::domain::{DisplayName, EmailAddress};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Employee record aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: DisplayName,
    email: EmailAddress,
    profile: EmployeeProfile,
    status: EmployeeStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEmployeeData {
    /// Persisted employee identifier.
    pub id: EmployeeId,
    /// Persisted employee name.
    pub name: DisplayName,
    /// Persisted contact email address.
    pub email: EmailAddress,
    /// Persisted organisational profile.
    pub profile: EmployeeProfile,
    /// Persisted employment status.
    pub status: EmployeeStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Creates a new employee record.
    #[must_use]
    pub fn new(
        name: DisplayName,
        email: EmailAddress,
        profile: EmployeeProfile,
        status: EmployeeStatus,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: EmployeeId::new(),
            name,
            email,
            profile,
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an employee record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEmployeeData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            profile: data.profile,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee name.
    #[must_use]
    pub const fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Returns the contact email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the organisational profile.
    #[must_use]
    pub const fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the employment status.
    #[must_use]
    pub const fn status(&self) -> EmployeeStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the employee.
    pub fn rename(&mut self, name: DisplayName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Changes the contact email address.
    pub fn change_email(&mut self, email: EmailAddress, clock: &impl Clock) {
        self.email = email;
        self.touch(clock);
    }

    /// Replaces the organisational profile.
    pub fn update_profile(&mut self, profile: EmployeeProfile, clock: &impl Clock) {
        self.profile = profile;
        self.touch(clock);
    }

    /// Changes the employment status.
    pub fn change_status(&mut self, status: EmployeeStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
