//! Credential hashing port.

use crate::identity::domain::CredentialHash;
use thiserror::Error;

/// Password hashing and verification contract.
///
/// Implementations own the encoding scheme embedded in the stored digest, so
/// verification must accept any digest the same implementation produced,
/// including ones written with older cost parameters.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derives a storable digest from a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialHasherError::Hashing`] when digest derivation
    /// fails.
    fn hash(&self, plain: &str) -> Result<CredentialHash, CredentialHasherError>;

    /// Checks a plaintext password against a stored digest.
    ///
    /// Returns `false` for a well-formed digest that does not match.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialHasherError::MalformedHash`] when the stored
    /// digest cannot be parsed, or
    /// [`CredentialHasherError::UnsupportedScheme`] when it was produced by
    /// an unknown scheme.
    fn verify(&self, plain: &str, encoded: &CredentialHash)
    -> Result<bool, CredentialHasherError>;
}

/// Errors returned by credential hasher implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialHasherError {
    /// Digest derivation failed.
    #[error("credential hashing failed: {0}")]
    Hashing(String),

    /// The stored digest does not follow the expected encoded form.
    #[error("stored credential hash is malformed: {0}")]
    MalformedHash(String),

    /// The stored digest names a scheme this hasher does not implement.
    #[error("unsupported credential hash scheme: {0}")]
    UnsupportedScheme(String),
}
