//! Service layer for account registration and login.
//!
//! Provides [`AuthService`] which coordinates credential hashing, account
//! persistence, and session-token issuance.

use crate::identity::{
    domain::{DisplayName, EmailAddress, IdentityDomainError, Role, User},
    ports::{
        AccessToken, CredentialHasher, CredentialHasherError, TokenIssuer, TokenIssuerError,
        UserRepository, UserRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    display_name: String,
    email: String,
    password: String,
}

impl RegisterUserRequest {
    /// Creates a registration request.
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

/// Request payload for logging into an existing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login product: the authenticated account and its session token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account.
    pub user: User,
    /// Signed session token for subsequent requests.
    pub token: AccessToken,
}

/// Service-level errors for authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),

    /// Credential hashing or verification failed.
    #[error(transparent)]
    Credential(#[from] CredentialHasherError),

    /// Session token issuance failed.
    #[error(transparent)]
    Token(#[from] TokenIssuerError),

    /// The email address or password did not match an account.
    ///
    /// Unknown addresses and wrong passwords surface identically so a caller
    /// cannot probe which addresses are registered.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Result type for authentication service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Registration and login orchestration service.
#[derive(Clone)]
pub struct AuthService<R, H, T, C>
where
    R: UserRepository,
    H: CredentialHasher,
    T: TokenIssuer,
    C: Clock + Send + Sync,
{
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
    clock: Arc<C>,
}

impl<R, H, T, C> AuthService<R, H, T, C>
where
    R: UserRepository,
    H: CredentialHasher,
    T: TokenIssuer,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
        }
    }

    /// Registers a new account with the default `Member` role.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Domain`] when the display name or email fail
    /// validation, [`AuthError::Credential`] when hashing fails, or
    /// [`AuthError::Repository`] when the email address is already registered
    /// or persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> AuthResult<User> {
        let RegisterUserRequest {
            display_name,
            email,
            password,
        } = request;

        let parsed_name = DisplayName::new(display_name)?;
        let parsed_email = EmailAddress::new(email)?;
        let credential = self.hasher.hash(&password)?;

        let user = User::new(
            parsed_name,
            parsed_email,
            credential,
            Role::Member,
            &*self.clock,
        );
        self.users.store(&user).await?;

        info!(user_id = %user.id(), email = %user.email(), "registered new account");
        Ok(user)
    }

    /// Authenticates an account and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the address is unknown
    /// or the password does not match, [`AuthError::Credential`] when the
    /// stored digest cannot be verified, or [`AuthError::Token`] when token
    /// issuance fails.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<LoginOutcome> {
        let LoginRequest { email, password } = request;

        let Ok(parsed_email) = EmailAddress::new(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .users
            .find_by_email(&parsed_email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self.hasher.verify(&password, user.credential())?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user, self.clock.utc())?;

        info!(user_id = %user.id(), "login succeeded");
        Ok(LoginOutcome { user, token })
    }
}
