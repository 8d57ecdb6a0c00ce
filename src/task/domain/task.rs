//! Task aggregate root owning its checklist and assignment set.

use super::{
    ChecklistItem, ChecklistItemId, ChecklistText, TaskDescription, TaskDomainError, TaskId,
    TaskPriority, TaskStatus, TaskTitle, derive_progress,
};
use crate::identity::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::collections::BTreeSet;

/// Task aggregate root.
///
/// A task owns its checklist items outright and references its assignees by
/// id. Status and start timestamp are derived from checklist completion (see
/// [`derive_progress`]); they are only directly settable while the checklist
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    start_date: Option<DateTime<Utc>>,
    assignees: BTreeSet<UserId>,
    checklist: Vec<ChecklistItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Task title.
    pub title: TaskTitle,
    /// Task description.
    pub description: TaskDescription,
    /// Task priority.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Initial status; honoured only while the checklist is empty and
    /// defaulting to `Pending`. With a non-empty checklist the status is
    /// derived from the items instead.
    pub status: Option<TaskStatus>,
    /// Assigned user identifiers.
    pub assignees: BTreeSet<UserId>,
    /// Initial checklist items, in creation order.
    pub checklist: Vec<ChecklistItem>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted start timestamp, if any.
    pub start_date: Option<DateTime<Utc>>,
    /// Persisted assignee set.
    pub assignees: BTreeSet<UserId>,
    /// Persisted checklist items, in creation order.
    pub checklist: Vec<ChecklistItem>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task.
    ///
    /// With an empty checklist the status comes from `data.status` (default
    /// `Pending`) and the start timestamp stays unset. With a non-empty
    /// checklist both are derived from the items, so a task created with
    /// completed items records the creation instant as its start.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let (status, start_date) = if data.checklist.is_empty() {
            (data.status.unwrap_or(TaskStatus::Pending), None)
        } else {
            derive_progress(&data.checklist, None, timestamp)
        };

        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status,
            priority: data.priority,
            due_date: data.due_date,
            start_date,
            assignees: data.assignees,
            checklist: data.checklist,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            start_date: data.start_date,
            assignees: data.assignees,
            checklist: data.checklist,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the start timestamp, if progress has begun.
    #[must_use]
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Returns the assigned user identifiers.
    #[must_use]
    pub const fn assignees(&self) -> &BTreeSet<UserId> {
        &self.assignees
    }

    /// Returns the checklist items in creation order.
    #[must_use]
    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    /// Returns whether the given user is in the assignee set.
    #[must_use]
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assignees.contains(&user)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn retitle(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn change_description(&mut self, description: TaskDescription, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Replaces the priority.
    pub fn change_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Replaces the due date.
    pub fn change_due_date(&mut self, due_date: NaiveDate, clock: &impl Clock) {
        self.due_date = Some(due_date);
        self.touch(clock);
    }

    /// Sets the status directly.
    ///
    /// Never touches the start timestamp: that only moves through checklist
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StatusNotDirectlySettable`] when the
    /// checklist is non-empty, because the status is then a derived value.
    pub fn change_status(
        &mut self,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.checklist.is_empty() {
            return Err(TaskDomainError::StatusNotDirectlySettable(self.id));
        }
        self.status = status;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the whole assignee set.
    pub fn replace_assignees(&mut self, assignees: BTreeSet<UserId>, clock: &impl Clock) {
        self.assignees = assignees;
        self.touch(clock);
    }

    /// Appends a checklist item and re-derives status and start timestamp.
    ///
    /// Returns the appended item.
    pub fn append_checklist_item(
        &mut self,
        text: ChecklistText,
        completed: bool,
        clock: &impl Clock,
    ) -> ChecklistItem {
        let item = ChecklistItem::new(text, completed);
        let snapshot = item.clone();
        self.checklist.push(item);

        let now = clock.utc();
        self.recompute_progress(now);
        self.updated_at = now;
        snapshot
    }

    /// Sets a checklist item's completion flag and re-derives status and
    /// start timestamp.
    ///
    /// `completed` follows patch semantics: `None` leaves the flag as-is
    /// while still re-deriving, which is a no-op by idempotence.
    ///
    /// Returns the item after the mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ChecklistItemNotFound`] when no item with
    /// `item_id` exists in this task.
    pub fn set_item_completed(
        &mut self,
        item_id: ChecklistItemId,
        completed: Option<bool>,
        clock: &impl Clock,
    ) -> Result<ChecklistItem, TaskDomainError> {
        let item = self
            .checklist
            .iter_mut()
            .find(|item| item.id() == item_id)
            .ok_or(TaskDomainError::ChecklistItemNotFound {
                task_id: self.id,
                item_id,
            })?;

        if let Some(flag) = completed {
            item.set_completed(flag);
        }
        let snapshot = item.clone();

        let now = clock.utc();
        self.recompute_progress(now);
        self.updated_at = now;
        Ok(snapshot)
    }

    /// Re-derives status and start timestamp from the current checklist.
    fn recompute_progress(&mut self, now: DateTime<Utc>) {
        let (status, start_date) = derive_progress(&self.checklist, self.start_date, now);
        self.status = status;
        self.start_date = start_date;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
