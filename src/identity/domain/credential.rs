//! Opaque credential hash type.

use super::IdentityDomainError;

/// Encoded credential digest stored against a user account.
///
/// The domain treats the value as opaque text; the encoding scheme (salt,
/// iteration count, digest) belongs to the hashing adapter that produced it.
/// Plaintext passwords never reach the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wraps an encoded credential digest.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyCredentialHash`] when the encoded
    /// value is empty after trimming.
    pub fn new(encoded: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let encoded_value = encoded.into();
        if encoded_value.trim().is_empty() {
            return Err(IdentityDomainError::EmptyCredentialHash);
        }
        Ok(Self(encoded_value))
    }

    /// Returns the encoded digest as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CredentialHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
