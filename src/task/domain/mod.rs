//! Domain model for tasks, checklists, and assignment.
//!
//! The task domain models the board's work items: validated text fields,
//! priority, the derived progress status with its start timestamp, the
//! checklist a task owns, and the set of assigned users. The derivation
//! rule lives in [`derive_progress`] and is applied by the aggregate after
//! every checklist mutation.

mod checklist;
mod error;
mod ids;
mod priority;
mod progress;
mod status;
mod task;
mod text;

pub use checklist::ChecklistItem;
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ChecklistItemId, TaskId};
pub use priority::TaskPriority;
pub use progress::derive_progress;
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task};
pub use text::{ChecklistText, TaskDescription, TaskTitle};
