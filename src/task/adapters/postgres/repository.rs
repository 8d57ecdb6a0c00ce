//! `PostgreSQL` repository implementation for task board storage.
//!
//! Every mutation runs inside one transaction so task scalars, checklist
//! items, and assignment relations commit together. Checklist items and
//! assignments are replaced wholesale on update; creation order is kept in
//! the `position` column.

use super::{
    models::{
        ChecklistItemRow, NewChecklistItemRow, NewTaskAssignmentRow, NewTaskRow,
        TaskAssignmentRow, TaskRow,
    },
    schema::{checklist_items, task_assignments, tasks},
};
use crate::identity::domain::UserId;
use crate::task::{
    domain::{
        ChecklistItem, ChecklistItemId, ChecklistText, PersistedTaskData, Task, TaskDescription,
        TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::{BTreeSet, HashMap};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        let item_rows = to_item_rows(task)?;
        let assignment_rows = to_assignment_rows(task);

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;
                insert_children(tx, &item_rows, &assignment_rows)
            })
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changed_row = to_new_row(task);
        let item_rows = to_item_rows(task)?;
        let assignment_rows = to_assignment_rows(task);

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                let updated_count =
                    diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                        .set(&changed_row)
                        .execute(tx)
                        .map_err(TaskRepositoryError::persistence)?;
                if updated_count == 0 {
                    return Err(TaskRepositoryError::NotFound(task_id));
                }

                delete_children(tx, task_id)?;
                insert_children(tx, &item_rows, &assignment_rows)
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                delete_children(tx, id)?;

                let deleted_count =
                    diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                        .execute(tx)
                        .map_err(TaskRepositoryError::persistence)?;
                if deleted_count == 0 {
                    return Err(TaskRepositoryError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(|task_row| load_aggregate(connection, task_row))
                .transpose()
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            load_aggregates(connection, rows)
        })
        .await
    }

    async fn list_for_user(&self, user: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let assigned_ids: Vec<uuid::Uuid> = task_assignments::table
                .filter(task_assignments::user_id.eq(user.into_inner()))
                .select(task_assignments::task_id)
                .load::<uuid::Uuid>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let rows = tasks::table
                .filter(tasks::id.eq_any(&assigned_ids))
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            load_aggregates(connection, rows)
        })
        .await
    }
}

fn insert_children(
    connection: &mut PgConnection,
    items: &[NewChecklistItemRow],
    assignments: &[NewTaskAssignmentRow],
) -> TaskRepositoryResult<()> {
    if !items.is_empty() {
        diesel::insert_into(checklist_items::table)
            .values(items)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
    }
    if !assignments.is_empty() {
        diesel::insert_into(task_assignments::table)
            .values(assignments)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
    }
    Ok(())
}

fn delete_children(connection: &mut PgConnection, task_id: TaskId) -> TaskRepositoryResult<()> {
    diesel::delete(
        checklist_items::table.filter(checklist_items::task_id.eq(task_id.into_inner())),
    )
    .execute(connection)
    .map_err(TaskRepositoryError::persistence)?;
    diesel::delete(
        task_assignments::table.filter(task_assignments::task_id.eq(task_id.into_inner())),
    )
    .execute(connection)
    .map_err(TaskRepositoryError::persistence)?;
    Ok(())
}

/// Loads the checklist and assignee set for a single task row.
fn load_aggregate(connection: &mut PgConnection, row: TaskRow) -> TaskRepositoryResult<Task> {
    let item_rows = checklist_items::table
        .filter(checklist_items::task_id.eq(row.id))
        .order(checklist_items::position.asc())
        .select(ChecklistItemRow::as_select())
        .load::<ChecklistItemRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    let assignment_rows = task_assignments::table
        .filter(task_assignments::task_id.eq(row.id))
        .select(TaskAssignmentRow::as_select())
        .load::<TaskAssignmentRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    row_to_task(row, item_rows, assignment_rows)
}

/// Loads checklists and assignee sets for many task rows with two batched
/// queries, preserving the row order.
fn load_aggregates(
    connection: &mut PgConnection,
    rows: Vec<TaskRow>,
) -> TaskRepositoryResult<Vec<Task>> {
    let task_ids: Vec<uuid::Uuid> = rows.iter().map(|row| row.id).collect();

    let item_rows = checklist_items::table
        .filter(checklist_items::task_id.eq_any(&task_ids))
        .order((
            checklist_items::task_id.asc(),
            checklist_items::position.asc(),
        ))
        .select(ChecklistItemRow::as_select())
        .load::<ChecklistItemRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    let assignment_rows = task_assignments::table
        .filter(task_assignments::task_id.eq_any(&task_ids))
        .select(TaskAssignmentRow::as_select())
        .load::<TaskAssignmentRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;

    let mut items_by_task: HashMap<uuid::Uuid, Vec<ChecklistItemRow>> = HashMap::new();
    for item in item_rows {
        items_by_task.entry(item.task_id).or_default().push(item);
    }
    let mut assignments_by_task: HashMap<uuid::Uuid, Vec<TaskAssignmentRow>> = HashMap::new();
    for assignment in assignment_rows {
        assignments_by_task
            .entry(assignment.task_id)
            .or_default()
            .push(assignment);
    }

    rows.into_iter()
        .map(|row| {
            let items = items_by_task.remove(&row.id).unwrap_or_default();
            let assignments = assignments_by_task.remove(&row.id).unwrap_or_default();
            row_to_task(row, items, assignments)
        })
        .collect()
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date(),
        start_date: task.start_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_item_rows(task: &Task) -> TaskRepositoryResult<Vec<NewChecklistItemRow>> {
    task.checklist()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let position = i32::try_from(index).map_err(TaskRepositoryError::persistence)?;
            Ok(NewChecklistItemRow {
                id: item.id().into_inner(),
                task_id: task.id().into_inner(),
                text: item.text().as_str().to_owned(),
                completed: item.completed(),
                position,
            })
        })
        .collect()
}

fn to_assignment_rows(task: &Task) -> Vec<NewTaskAssignmentRow> {
    task.assignees()
        .iter()
        .map(|user| NewTaskAssignmentRow {
            task_id: task.id().into_inner(),
            user_id: user.into_inner(),
        })
        .collect()
}

fn row_to_task(
    row: TaskRow,
    item_rows: Vec<ChecklistItemRow>,
    assignment_rows: Vec<TaskAssignmentRow>,
) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        priority,
        due_date,
        start_date,
        created_at,
        updated_at,
    } = row;

    let parsed_title =
        TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_description =
        TaskDescription::new(description).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_status = TaskStatus::try_from(status.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_priority = TaskPriority::try_from(priority.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    let checklist = item_rows
        .into_iter()
        .map(row_to_item)
        .collect::<TaskRepositoryResult<Vec<ChecklistItem>>>()?;
    let assignees: BTreeSet<UserId> = assignment_rows
        .into_iter()
        .map(|assignment| UserId::from_uuid(assignment.user_id))
        .collect();

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: parsed_title,
        description: parsed_description,
        status: parsed_status,
        priority: parsed_priority,
        due_date,
        start_date,
        assignees,
        checklist,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn row_to_item(row: ChecklistItemRow) -> TaskRepositoryResult<ChecklistItem> {
    let text =
        ChecklistText::new(row.text).map_err(TaskRepositoryError::invalid_persisted_data)?;
    Ok(ChecklistItem::from_persisted(
        ChecklistItemId::from_uuid(row.id),
        text,
        row.completed,
    ))
}
