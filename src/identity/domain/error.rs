//! Error types for identity domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not shaped like `local@domain`.
    #[error("email address '{0}' is not a valid address")]
    InvalidEmail(String),

    /// The email address exceeds the 255-character storage limit.
    #[error("email address exceeds 255 character limit: {0}")]
    EmailTooLong(String),

    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The display name exceeds the 100-character storage limit.
    #[error("display name exceeds 100 character limit: {0}")]
    DisplayNameTooLong(String),

    /// The encoded credential hash is empty.
    #[error("credential hash must not be empty")]
    EmptyCredentialHash,
}

/// Error returned while parsing a role from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
