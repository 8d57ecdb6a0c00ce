//! User account aggregate root.

use super::{CredentialHash, DisplayName, EmailAddress, Role, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// User account aggregate root.
///
/// Accounts are immutable after registration apart from timestamps; there is
/// no profile-editing operation, and roles are assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    display_name: DisplayName,
    email: EmailAddress,
    credential: CredentialHash,
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted account identifier.
    pub id: UserId,
    /// Persisted display name.
    pub display_name: DisplayName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted credential digest.
    pub credential: CredentialHash,
    /// Persisted access role.
    pub role: Role,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user account.
    #[must_use]
    pub fn new(
        display_name: DisplayName,
        email: EmailAddress,
        credential: CredentialHash,
        role: Role,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            display_name,
            email,
            credential,
            role,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            display_name: data.display_name,
            email: data.email,
            credential: data.credential,
            role: data.role,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored credential digest.
    #[must_use]
    pub const fn credential(&self) -> &CredentialHash {
        &self.credential
    }

    /// Returns the access role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
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
}
