//! Integration tests for assignment-scoped task retrieval.

use std::sync::Arc;

use gaffer::identity::{adapters::InMemoryUserRepository, domain::UserId};
use gaffer::task::{
    adapters::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskPriority},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskBoardError},
};
use rstest::rstest;

use crate::in_memory::helpers::{auth_service, board_service, register_member, tasks, users};

fn request(title: &str, assignees: &[UserId]) -> CreateTaskRequest {
    CreateTaskRequest::new(title, "Scoped retrieval test task", TaskPriority::Medium)
        .with_assignees(assignees.iter().copied())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn members_see_only_their_own_assignments(
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
) {
    let auth = auth_service(&users);
    let ada = register_member(&auth, "Ada Lovelace", "ada@example.com").await;
    let grace = register_member(&auth, "Grace Hopper", "grace@example.com").await;
    let board = board_service(&tasks, &users);

    let ada_task = board
        .create_task(request("Ada only", &[ada.id()]))
        .await
        .expect("creation should succeed");
    board
        .create_task(request("Grace only", &[grace.id()]))
        .await
        .expect("creation should succeed");
    let shared = board
        .create_task(request("Shared", &[ada.id(), grace.id()]))
        .await
        .expect("creation should succeed");

    let ada_list = board
        .list_tasks_for_user(ada.id())
        .await
        .expect("listing should succeed");
    let ada_ids: Vec<TaskId> = ada_list.iter().map(Task::id).collect();

    assert_eq!(ada_list.len(), 2);
    assert!(ada_ids.contains(&ada_task.id()));
    assert!(ada_ids.contains(&shared.id()));

    let everything = board
        .list_all_tasks()
        .await
        .expect("listing should succeed");
    assert_eq!(everything.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unassigned_and_missing_tasks_are_indistinguishable(
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
) {
    let auth = auth_service(&users);
    let ada = register_member(&auth, "Ada Lovelace", "ada@example.com").await;
    let grace = register_member(&auth, "Grace Hopper", "grace@example.com").await;
    let board = board_service(&tasks, &users);

    let ada_task = board
        .create_task(request("Ada only", &[ada.id()]))
        .await
        .expect("creation should succeed");

    let unassigned = board.get_task_for_user(grace.id(), ada_task.id()).await;
    let missing = board.get_task_for_user(grace.id(), TaskId::new()).await;

    assert!(matches!(
        unassigned,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));
    assert!(matches!(
        missing,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let assigned = board
        .get_task_for_user(ada.id(), ada_task.id())
        .await
        .expect("assigned lookup should succeed");
    assert_eq!(assigned.id(), ada_task.id());
}
