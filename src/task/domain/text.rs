//! Validated text types for tasks and checklist items.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a task title, matching the `VARCHAR(200)` column.
const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for checklist item text, matching the `VARCHAR(500)` column.
const MAX_CHECKLIST_TEXT_LENGTH: usize = 500;

/// Validated task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// The input is trimmed. Interior whitespace and case are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming, or [`TaskDomainError::TitleTooLong`] when it exceeds 200
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated task description.
///
/// Descriptions are free-form text stored in a `TEXT` column, so only
/// blankness is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated task description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated checklist item text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistText(String);

impl ChecklistText {
    /// Creates validated checklist item text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyChecklistText`] when the value is
    /// empty after trimming, or [`TaskDomainError::ChecklistTextTooLong`]
    /// when it exceeds 500 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyChecklistText);
        }

        if trimmed.len() > MAX_CHECKLIST_TEXT_LENGTH {
            return Err(TaskDomainError::ChecklistTextTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ChecklistText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ChecklistText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
