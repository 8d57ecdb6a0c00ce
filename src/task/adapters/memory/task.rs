//! In-memory repository for task board tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    assignee_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory task repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_assignees(state: &mut InMemoryTaskState, task: &Task) {
    for user in task.assignees() {
        state
            .assignee_index
            .entry(*user)
            .or_default()
            .push(task.id());
    }
}

/// Removes a task ID from the assignee index, cleaning up empty entries.
fn remove_from_index(index: &mut HashMap<UserId, Vec<TaskId>>, task_id: TaskId, user: UserId) {
    if let Some(ids) = index.get_mut(&user) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(&user);
        }
    }
}

/// Sorts tasks most recently created first, with the id as a stable
/// tiebreak.
fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().into_inner().cmp(&a.id().into_inner()))
    });
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        index_assignees(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        for user in old_task.assignees() {
            remove_from_index(&mut state.assignee_index, task.id(), *user);
        }
        index_assignees(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let task = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        for user in task.assignees() {
            remove_from_index(&mut state.assignee_index, id, *user);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    async fn list_for_user(&self, user: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .assignee_index
            .get(&user)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }
}
