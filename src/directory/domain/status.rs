//! Employment status.

use super::ParseEmployeeStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment status of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and working.
    Active,
    /// Employed but not currently working (leave, sabbatical).
    Inactive,
    /// No longer employed; the record is kept for history.
    Terminated,
}

impl EmployeeStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EmployeeStatus {
    type Error = ParseEmployeeStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "terminated" => Ok(Self::Terminated),
            _ => Err(ParseEmployeeStatusError(value.to_owned())),
        }
    }
}
