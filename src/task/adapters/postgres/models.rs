//! Diesel row models for task board persistence.

use super::schema::{checklist_items, task_assignments, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Progress status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Timestamp of the first checklist progress, if any.
    pub start_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
///
/// `None` fields write `NULL` on update, so a start date cleared by the
/// derivation rule clears the column too.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Progress status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Timestamp of the first checklist progress, if any.
    pub start_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for checklist items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = checklist_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChecklistItemRow {
    /// Internal item identifier.
    pub id: uuid::Uuid,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Item text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation-order position within the task's checklist.
    pub position: i32,
}

/// Insert model for checklist items.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = checklist_items)]
pub struct NewChecklistItemRow {
    /// Internal item identifier.
    pub id: uuid::Uuid,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Item text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation-order position within the task's checklist.
    pub position: i32,
}

/// Query result row for assignment relations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskAssignmentRow {
    /// Assigned task identifier.
    pub task_id: uuid::Uuid,
    /// Assigned user identifier.
    pub user_id: uuid::Uuid,
}

/// Insert model for assignment relations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_assignments)]
pub struct NewTaskAssignmentRow {
    /// Assigned task identifier.
    pub task_id: uuid::Uuid,
    /// Assigned user identifier.
    pub user_id: uuid::Uuid,
}
