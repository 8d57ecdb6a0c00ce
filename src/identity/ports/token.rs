//! Session token port.

use crate::identity::domain::{EmailAddress, Role, User, UserId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Signed session token handed to a caller after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Opaque signed token text.
    pub token: String,
    /// Instant after which the token is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

/// Claims recovered from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Account the token was issued to.
    pub user_id: UserId,
    /// Email address of the account at issuance time.
    pub email: EmailAddress,
    /// Access role of the account at issuance time.
    pub role: Role,
    /// Instant the token was issued.
    pub issued_at: DateTime<Utc>,
    /// Instant the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Session token issuance and verification contract.
pub trait TokenIssuer: Send + Sync {
    /// Issues a signed token for the given account.
    ///
    /// The token embeds the account identifier, email, and role, and expires
    /// a fixed interval after `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssuerError::Encoding`] when the token cannot be
    /// signed, or [`TokenIssuerError::ExpiryOutOfRange`] when the expiry
    /// instant is not representable.
    fn issue(&self, user: &User, issued_at: DateTime<Utc>)
    -> Result<AccessToken, TokenIssuerError>;

    /// Verifies a token and recovers its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssuerError::Expired`] when the token has lapsed or
    /// [`TokenIssuerError::InvalidToken`] when the signature or claims do
    /// not verify.
    fn decode(&self, token: &str) -> Result<TokenClaims, TokenIssuerError>;
}

/// Errors returned by token issuer implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenIssuerError {
    /// The token could not be signed.
    #[error("token encoding failed: {0}")]
    Encoding(String),

    /// The computed expiry instant overflows the representable range.
    #[error("token expiry out of range")]
    ExpiryOutOfRange,

    /// The token has expired.
    #[error("token expired")]
    Expired,

    /// The token failed signature or claim verification.
    #[error("invalid token: {0}")]
    InvalidToken(String),
}
