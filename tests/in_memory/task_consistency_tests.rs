//! Integration tests for checklist-driven task state consistency.

use std::collections::BTreeSet;
use std::sync::Arc;

use gaffer::identity::{adapters::InMemoryUserRepository, ports::UserRepository};
use gaffer::task::{
    adapters::InMemoryTaskRepository,
    domain::{ChecklistItem, ChecklistItemId, Task, TaskPriority, TaskStatus},
    ports::TaskRepositoryError,
    services::{ChecklistItemSpec, CreateTaskRequest, TaskBoardError},
};
use rstest::rstest;

use crate::in_memory::helpers::{auth_service, board_service, register_member, tasks, users};

fn errands_request() -> CreateTaskRequest {
    CreateTaskRequest::new(
        "Weekly errands",
        "Shopping and admin for the week",
        TaskPriority::Medium,
    )
    .with_checklist([
        ChecklistItemSpec::new("Buy milk"),
        ChecklistItemSpec::new("Pay bills"),
    ])
}

fn item_id(task: &Task, text: &str) -> ChecklistItemId {
    task.checklist()
        .iter()
        .find(|item| item.text().as_str() == text)
        .map(ChecklistItem::id)
        .expect("checklist item present")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checklist_completion_scenario_drives_status_and_start_date(
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
) {
    let board = board_service(&tasks, &users);

    let created = board
        .create_task(errands_request())
        .await
        .expect("creation should succeed");
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.start_date(), None);

    let buy_milk = item_id(&created, "Buy milk");
    let pay_bills = item_id(&created, "Pay bills");

    board
        .update_checklist_item(created.id(), buy_milk, Some(true))
        .await
        .expect("item update should succeed");
    let after_first = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(after_first.status(), TaskStatus::InProgress);
    let started_at = after_first.start_date().expect("start date set");

    board
        .update_checklist_item(created.id(), pay_bills, Some(true))
        .await
        .expect("item update should succeed");
    let after_second = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(after_second.status(), TaskStatus::Completed);
    assert_eq!(after_second.start_date(), Some(started_at));

    board
        .update_checklist_item(created.id(), buy_milk, Some(false))
        .await
        .expect("item update should succeed");
    let after_revert = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(after_revert.status(), TaskStatus::InProgress);
    assert_eq!(after_revert.start_date(), Some(started_at));

    board
        .update_checklist_item(created.id(), pay_bills, Some(false))
        .await
        .expect("item update should succeed");
    let after_full_revert = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(after_full_revert.status(), TaskStatus::Pending);
    assert_eq!(after_full_revert.start_date(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn round_trip_preserves_assignees_and_item_order(
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
) {
    let auth = auth_service(&users);
    let ada = register_member(&auth, "Ada Lovelace", "ada@example.com").await;
    let grace = register_member(&auth, "Grace Hopper", "grace@example.com").await;
    let board = board_service(&tasks, &users);

    let created = board
        .create_task(
            CreateTaskRequest::new(
                "Weekly errands",
                "Shopping and admin for the week",
                TaskPriority::High,
            )
            .with_assignees([ada.id(), grace.id()])
            .with_checklist([
                ChecklistItemSpec::new("Buy milk"),
                ChecklistItemSpec::new("Pay bills"),
                ChecklistItemSpec::new("Sweep floor"),
            ]),
        )
        .await
        .expect("creation should succeed");

    let fetched = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched.assignees(), &BTreeSet::from([ada.id(), grace.id()]));
    let texts: Vec<&str> = fetched
        .checklist()
        .iter()
        .map(|item| item.text().as_str())
        .collect();
    assert_eq!(texts, ["Buy milk", "Pay bills", "Sweep floor"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_item_patches_do_not_move_derived_state(
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
) {
    let board = board_service(&tasks, &users);
    let created = board
        .create_task(errands_request())
        .await
        .expect("creation should succeed");
    let buy_milk = item_id(&created, "Buy milk");

    board
        .update_checklist_item(created.id(), buy_milk, Some(true))
        .await
        .expect("item update should succeed");
    let first = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    board
        .update_checklist_item(created.id(), buy_milk, Some(true))
        .await
        .expect("repeat update should succeed");
    board
        .update_checklist_item(created.id(), buy_milk, None)
        .await
        .expect("empty patch should succeed");
    let second = board
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(second.status(), first.status());
    assert_eq!(second.start_date(), first.start_date());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_cascades_to_items_and_spares_users(
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
) {
    let auth = auth_service(&users);
    let ada = register_member(&auth, "Ada Lovelace", "ada@example.com").await;
    let board = board_service(&tasks, &users);

    let created = board
        .create_task(errands_request().with_assignees([ada.id()]))
        .await
        .expect("creation should succeed");

    board
        .delete_task(created.id())
        .await
        .expect("deletion should succeed");

    let lookup = board.get_task(created.id()).await;
    assert!(matches!(
        lookup,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let survivor = users
        .find_by_id(ada.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(survivor.map(|user| user.id()), Some(ada.id()));
}
