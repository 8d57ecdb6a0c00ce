//! Checklist items owned by a task.

use super::{ChecklistItemId, ChecklistText};
use serde::{Deserialize, Serialize};

/// A single checklist entry within a task.
///
/// Items belong to exactly one task for their whole life and are deleted
/// with it. The completion flag is only flipped through the owning
/// [`Task`](super::Task) so the task status stays consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    id: ChecklistItemId,
    text: ChecklistText,
    completed: bool,
}

impl ChecklistItem {
    /// Creates a new checklist item.
    #[must_use]
    pub fn new(text: ChecklistText, completed: bool) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text,
            completed,
        }
    }

    /// Reconstructs a checklist item from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: ChecklistItemId, text: ChecklistText, completed: bool) -> Self {
        Self {
            id,
            text,
            completed,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ChecklistItemId {
        self.id
    }

    /// Returns the item text.
    #[must_use]
    pub const fn text(&self) -> &ChecklistText {
        &self.text
    }

    /// Returns whether the item has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Sets the completion flag. Callers go through the owning task.
    pub(super) const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
