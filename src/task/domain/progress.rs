//! Derivation rule mapping checklist completion to task progress.

use super::{ChecklistItem, TaskStatus};
use chrono::{DateTime, Utc};

/// Derives the task status and start timestamp from checklist state.
///
/// The rule, applied after every checklist mutation:
///
/// - every item completed (and at least one item exists): `Completed`; the
///   start timestamp is kept if already set, otherwise captured from `now`.
/// - at least one item completed: `InProgress`; the start timestamp is
///   captured from `now` only when currently unset, so it always records the
///   moment progress first began.
/// - no items completed, or no items at all: `Pending`; the start timestamp
///   is cleared.
///
/// The function is pure and idempotent: re-deriving from the same checklist
/// state yields the same pair, and an already-set start timestamp is never
/// overwritten while any item remains completed.
#[must_use]
pub fn derive_progress(
    checklist: &[ChecklistItem],
    current_start: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (TaskStatus, Option<DateTime<Utc>>) {
    let completed_count = checklist.iter().filter(|item| item.completed()).count();

    if completed_count == 0 {
        return (TaskStatus::Pending, None);
    }

    let status = if completed_count == checklist.len() {
        TaskStatus::Completed
    } else {
        TaskStatus::InProgress
    };
    (status, current_start.or(Some(now)))
}
