//! Idempotent default-admin seeding.
//!
//! Run once at startup so a fresh deployment has an administrator account to
//! log in with. The routine is guarded by an existence check and treats a
//! duplicate-email conflict during the insert as another seeder having won
//! the race, so repeated or concurrent invocations settle on one account.

use crate::identity::{
    domain::{DisplayName, EmailAddress, IdentityDomainError, Role, User},
    ports::{CredentialHasher, CredentialHasherError, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

/// Profile and credentials for the seeded administrator account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeedSpec {
    display_name: String,
    email: String,
    password: String,
}

impl AdminSeedSpec {
    /// Creates a seed specification.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Errors returned by the seeding routine.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Domain validation of the seed values failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),

    /// Credential hashing failed.
    #[error(transparent)]
    Credential(#[from] CredentialHasherError),
}

/// Ensures an administrator account with the configured email exists.
///
/// Returns `true` when this call created the account and `false` when one
/// already existed. A duplicate-email conflict during the insert means a
/// concurrent seeder got there first and also reports `false`.
///
/// # Errors
///
/// Returns [`BootstrapError::Domain`] when the seed values fail validation,
/// [`BootstrapError::Credential`] when password hashing fails, or
/// [`BootstrapError::Repository`] when lookup or persistence fails.
pub async fn seed_default_admin<R, H, C>(
    users: &R,
    hasher: &H,
    clock: &C,
    spec: AdminSeedSpec,
) -> Result<bool, BootstrapError>
where
    R: UserRepository,
    H: CredentialHasher,
    C: Clock + Send + Sync,
{
    let AdminSeedSpec {
        display_name,
        email,
        password,
    } = spec;

    let parsed_name = DisplayName::new(display_name)?;
    let parsed_email = EmailAddress::new(email)?;

    if users.find_by_email(&parsed_email).await?.is_some() {
        return Ok(false);
    }

    let credential = hasher.hash(&password)?;
    let admin = User::new(parsed_name, parsed_email, credential, Role::Admin, clock);

    match users.store(&admin).await {
        Ok(()) => {
            info!(user_id = %admin.id(), email = %admin.email(), "seeded default admin account");
            Ok(true)
        }
        Err(UserRepositoryError::DuplicateEmail(_)) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::adapters::{InMemoryUserRepository, Pbkdf2CredentialHasher};
    use crate::identity::ports::MockUserRepository;
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Pbkdf2CredentialHasher {
        Pbkdf2CredentialHasher::with_iterations(1_000)
    }

    fn root_spec() -> AdminSeedSpec {
        AdminSeedSpec::new("Root Admin", "admin@example.com", "change-me-soon")
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn seeding_creates_the_admin_account(hasher: Pbkdf2CredentialHasher) {
        let users = InMemoryUserRepository::new();

        let created = seed_default_admin(&users, &hasher, &DefaultClock, root_spec())
            .await
            .expect("seeding should succeed");
        assert!(created);

        let admins = users
            .list_by_role(Role::Admin)
            .await
            .expect("listing should succeed");
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].email().as_str(), "admin@example.com");
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn repeated_seeding_changes_nothing(hasher: Pbkdf2CredentialHasher) {
        let users = InMemoryUserRepository::new();

        let first = seed_default_admin(&users, &hasher, &DefaultClock, root_spec())
            .await
            .expect("seeding should succeed");
        let second = seed_default_admin(&users, &hasher, &DefaultClock, root_spec())
            .await
            .expect("repeat seeding should succeed");

        assert!(first);
        assert!(!second);

        let admins = users
            .list_by_role(Role::Admin)
            .await
            .expect("listing should succeed");
        assert_eq!(admins.len(), 1);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn losing_the_insert_race_reports_not_created(hasher: Pbkdf2CredentialHasher) {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_store()
            .returning(|user| Err(UserRepositoryError::DuplicateEmail(user.email().clone())));

        let created = seed_default_admin(&users, &hasher, &DefaultClock, root_spec())
            .await
            .expect("losing the race is not an error");

        assert!(!created);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn invalid_seed_email_is_rejected(hasher: Pbkdf2CredentialHasher) {
        let users = InMemoryUserRepository::new();
        let spec = AdminSeedSpec::new("Root Admin", "not-an-address", "change-me-soon");

        let result = seed_default_admin(&users, &hasher, &DefaultClock, spec).await;

        assert!(matches!(
            result,
            Err(BootstrapError::Domain(IdentityDomainError::InvalidEmail(_)))
        ));
    }
}
