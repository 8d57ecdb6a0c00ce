//! Validated display name type.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a display name, matching the `VARCHAR(100)` column.
const MAX_NAME_LENGTH: usize = 100;

/// Validated human-readable name for a user or employee.
///
/// Display names are free-form text ("Ada Lovelace"), trimmed at the
/// boundary and bounded by the storage column width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a validated display name.
    ///
    /// The input is trimmed. Interior whitespace and case are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyDisplayName`] when the value is
    /// empty after trimming, or [`IdentityDomainError::DisplayNameTooLong`]
    /// when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(IdentityDomainError::EmptyDisplayName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(IdentityDomainError::DisplayNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the display name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
