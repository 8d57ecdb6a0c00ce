//! Service layer for account lookup and team membership listings.

use crate::identity::{
    domain::{EmailAddress, IdentityDomainError, Role, User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Lookup input failed domain validation.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for roster service operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Account lookup and team listing service.
#[derive(Clone)]
pub struct TeamRosterService<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> TeamRosterService<R>
where
    R: UserRepository,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Finds an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when no account
    /// has the given identifier, or the underlying repository error when
    /// persistence lookup fails.
    pub async fn find_user(&self, id: UserId) -> RosterResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserRepositoryError::NotFound(id).into())
    }

    /// Finds an account by email address.
    ///
    /// Returns `None` when no account holds the given address.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Domain`] when the address does not parse, or
    /// [`RosterError::Repository`] when persistence lookup fails.
    pub async fn find_by_email(&self, email: &str) -> RosterResult<Option<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.users.find_by_email(&address).await?)
    }

    /// Returns all accounts with the `Member` role, most recently created
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Repository`] when persistence lookup fails.
    pub async fn list_team_members(&self) -> RosterResult<Vec<User>> {
        Ok(self.users.list_by_role(Role::Member).await?)
    }
}
