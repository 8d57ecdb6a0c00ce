//! Validated email address type.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(255)` column.
const MAX_EMAIL_LENGTH: usize = 255;

/// Validated, lowercase email address.
///
/// Email addresses identify accounts uniquely, so they are normalised to
/// lowercase at the boundary. Validation is deliberately shallow: exactly one
/// `@` separating two non-empty halves, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyEmail`] when the value is empty
    /// after trimming, [`IdentityDomainError::InvalidEmail`] when it is not
    /// shaped like `local@domain`, or [`IdentityDomainError::EmailTooLong`]
    /// when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyEmail);
        }

        if normalized.len() > MAX_EMAIL_LENGTH {
            return Err(IdentityDomainError::EmailTooLong(raw));
        }

        let mut halves = normalized.split('@');
        let local = halves.next().unwrap_or_default();
        let domain = halves.next().unwrap_or_default();
        let well_formed = halves.next().is_none()
            && !local.is_empty()
            && !domain.is_empty()
            && !normalized.chars().any(char::is_whitespace);

        if !well_formed {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
