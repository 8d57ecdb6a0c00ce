//! Service layer for the task board.
//!
//! Provides [`TaskBoardService`] which coordinates task creation, scalar
//! updates, assignment replacement, checklist mutation, and assignment-scoped
//! retrieval. Checklist mutations and the status derivation they trigger are
//! applied to the aggregate in memory and persisted with a single repository
//! update, so both land together or not at all.

use crate::identity::domain::UserId;
use crate::identity::ports::{UserRepository, UserRepositoryError};
use crate::task::{
    domain::{
        ChecklistItem, ChecklistItemId, ChecklistText, NewTaskData, Task, TaskDescription,
        TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Specification of one checklist item in a create or append request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItemSpec {
    text: String,
    completed: bool,
}

impl ChecklistItemSpec {
    /// Creates an item specification, not yet completed.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    status: Option<TaskStatus>,
    assignees: Vec<UserId>,
    checklist: Vec<ChecklistItemSpec>,
}

impl CreateTaskRequest {
    /// Creates a request with the mandatory task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            due_date: None,
            status: None,
            assignees: Vec::new(),
            checklist: Vec::new(),
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets an explicit initial status.
    ///
    /// Honoured only when the checklist is empty; with items present the
    /// status is derived from them instead.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the assigned user identifiers.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Sets the initial checklist items, in order.
    #[must_use]
    pub fn with_checklist(mut self, items: impl IntoIterator<Item = ChecklistItemSpec>) -> Self {
        self.checklist = items.into_iter().collect();
        self
    }
}

/// Request payload for partially updating a task.
///
/// Absent fields keep their stored values. A provided assignee list (even an
/// empty one) replaces the whole assignment set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
    status: Option<TaskStatus>,
    assignees: Option<Vec<UserId>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the status directly; rejected when the checklist is non-empty.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the whole assignment set with the given identifiers.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = Some(assignees.into_iter().collect());
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation or a derived-state rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Assignee lookup against the identity store failed.
    #[error(transparent)]
    Identity(#[from] UserRepositoryError),

    /// A referenced assignee does not exist.
    #[error("assignee not found: {0}")]
    AssigneeNotFound(UserId),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, U, C> TaskBoardService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
        }
    }

    /// Creates a task with its checklist items and assignments.
    ///
    /// Every referenced assignee is resolved against the identity store
    /// before anything persists; the first missing identifier aborts the
    /// whole creation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when a text field fails validation,
    /// [`TaskBoardError::AssigneeNotFound`] on the first unresolvable
    /// assignee, or [`TaskBoardError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            priority,
            due_date,
            status,
            assignees,
            checklist,
        } = request;

        let parsed_title = TaskTitle::new(title)?;
        let parsed_description = TaskDescription::new(description)?;
        let resolved = self.resolve_assignees(assignees).await?;
        let items = checklist
            .into_iter()
            .map(|spec| {
                let text = ChecklistText::new(spec.text)?;
                Ok(ChecklistItem::new(text, spec.completed))
            })
            .collect::<Result<Vec<ChecklistItem>, TaskDomainError>>()?;

        let task = Task::new(
            NewTaskData {
                title: parsed_title,
                description: parsed_description,
                priority,
                due_date,
                status,
                assignees: resolved,
                checklist: items,
            },
            &*self.clock,
        );
        self.tasks.store(&task).await?;

        info!(
            task_id = %task.id(),
            assignees = task.assignees().len(),
            items = task.checklist().len(),
            "created task"
        );
        Ok(task)
    }

    /// Fetches a task by identifier, regardless of assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task is not found or
    /// persistence lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.find_by_id_or_error(id).await
    }

    /// Returns all tasks, most recently created first.
    ///
    /// Role gating for this unrestricted view is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup fails.
    pub async fn list_all_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.tasks.list_all().await?)
    }

    /// Returns the tasks assigned to the given user, most recently created
    /// first. Empty when none are.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup fails.
    pub async fn list_tasks_for_user(&self, user: UserId) -> TaskBoardResult<Vec<Task>> {
        Ok(self.tasks.list_for_user(user).await?)
    }

    /// Fetches a task on behalf of a user.
    ///
    /// A task the user is not assigned to surfaces as the same not-found
    /// error as a task that does not exist, so callers cannot probe for
    /// other people's task identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with a not-found error when the
    /// task is missing or not assigned to the user, or when persistence
    /// lookup fails.
    pub async fn get_task_for_user(&self, user: UserId, task_id: TaskId) -> TaskBoardResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .filter(|task| task.is_assigned_to(user))
            .ok_or_else(|| TaskRepositoryError::NotFound(task_id).into())
    }

    /// Applies a partial update to a task.
    ///
    /// Provided scalar fields overwrite stored values. A provided assignee
    /// list wholesale-replaces the assignment set after resolving every
    /// identifier; an empty list clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when a replacement value fails
    /// validation or the status is set while checklist items exist,
    /// [`TaskBoardError::AssigneeNotFound`] on the first unresolvable
    /// assignee, or [`TaskBoardError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;

        if let Some(title) = request.title {
            task.retitle(TaskTitle::new(title)?, &*self.clock);
        }
        if let Some(description) = request.description {
            task.change_description(TaskDescription::new(description)?, &*self.clock);
        }
        if let Some(priority) = request.priority {
            task.change_priority(priority, &*self.clock);
        }
        if let Some(due_date) = request.due_date {
            task.change_due_date(due_date, &*self.clock);
        }
        if let Some(status) = request.status {
            task.change_status(status, &*self.clock)?;
        }
        if let Some(assignees) = request.assignees {
            let resolved = self.resolve_assignees(assignees).await?;
            task.replace_assignees(resolved, &*self.clock);
        }

        self.tasks.update(&task).await?;

        info!(task_id = %task.id(), "updated task");
        Ok(task)
    }

    /// Deletes a task together with its checklist items.
    ///
    /// Assignment relations detach; the referenced users remain.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task is not found or
    /// persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<()> {
        self.tasks.delete(id).await?;

        info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Sets a checklist item's completion flag and persists the re-derived
    /// task state with it as one unit.
    ///
    /// `completed` follows patch semantics: `None` leaves the flag as-is.
    /// Returns the item after the mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task is not found,
    /// [`TaskBoardError::Domain`] when the item is not in the task, or
    /// [`TaskBoardError::Repository`] when persistence fails.
    pub async fn update_checklist_item(
        &self,
        task_id: TaskId,
        item_id: ChecklistItemId,
        completed: Option<bool>,
    ) -> TaskBoardResult<ChecklistItem> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        let item = task.set_item_completed(item_id, completed, &*self.clock)?;
        self.tasks.update(&task).await?;

        info!(
            task_id = %task_id,
            item_id = %item.id(),
            completed = item.completed(),
            status = %task.status(),
            "updated checklist item"
        );
        Ok(item)
    }

    /// Appends a checklist item to a task and persists the re-derived task
    /// state with it as one unit.
    ///
    /// Returns the appended item.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task is not found,
    /// [`TaskBoardError::Domain`] when the text fails validation, or
    /// [`TaskBoardError::Repository`] when persistence fails.
    pub async fn add_checklist_item(
        &self,
        task_id: TaskId,
        spec: ChecklistItemSpec,
    ) -> TaskBoardResult<ChecklistItem> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        let text = ChecklistText::new(spec.text)?;
        let item = task.append_checklist_item(text, spec.completed, &*self.clock);
        self.tasks.update(&task).await?;

        info!(task_id = %task_id, item_id = %item.id(), "added checklist item");
        Ok(item)
    }

    async fn resolve_assignees(&self, ids: Vec<UserId>) -> TaskBoardResult<BTreeSet<UserId>> {
        let mut resolved = BTreeSet::new();
        for id in ids {
            if self.users.find_by_id(id).await?.is_none() {
                return Err(TaskBoardError::AssigneeNotFound(id));
            }
            resolved.insert(id);
        }
        Ok(resolved)
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}
