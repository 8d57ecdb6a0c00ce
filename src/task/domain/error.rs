//! Error types for task domain validation and parsing.

use super::{ChecklistItemId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the 200-character storage limit.
    #[error("task title exceeds 200 character limit: {0}")]
    TitleTooLong(String),

    /// The description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The checklist item text is empty after trimming.
    #[error("checklist item text must not be empty")]
    EmptyChecklistText,

    /// The checklist item text exceeds the 500-character storage limit.
    #[error("checklist item text exceeds 500 character limit: {0}")]
    ChecklistTextTooLong(String),

    /// The checklist item does not exist within the task.
    #[error("checklist item {item_id} not found in task {task_id}")]
    ChecklistItemNotFound {
        /// The task that was searched.
        task_id: TaskId,
        /// The missing item identifier.
        item_id: ChecklistItemId,
    },

    /// The status is derived from the checklist and cannot be set directly.
    #[error("status of task {0} is derived from its checklist and cannot be set directly")]
    StatusNotDirectlySettable(TaskId),
}

/// Error returned while parsing a task status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
