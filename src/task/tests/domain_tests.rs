//! Unit tests for task domain types and aggregate behaviour.

use crate::identity::domain::UserId;
use crate::task::domain::{
    ChecklistItem, ChecklistItemId, ChecklistText, NewTaskData, Task, TaskDescription,
    TaskDomainError, TaskPriority, TaskStatus, TaskTitle,
};
use chrono::NaiveDate;
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::collections::BTreeSet;

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn item(text: &str, completed: bool) -> ChecklistItem {
    ChecklistItem::new(
        ChecklistText::new(text).expect("valid checklist text"),
        completed,
    )
}

fn errand_data(checklist: Vec<ChecklistItem>) -> Result<NewTaskData, TaskDomainError> {
    Ok(NewTaskData {
        title: TaskTitle::new("Weekly errands")?,
        description: TaskDescription::new("Shopping and admin for the week")?,
        priority: TaskPriority::Medium,
        due_date: None,
        status: None,
        assignees: BTreeSet::new(),
        checklist,
    })
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("  Buy milk  ").expect("valid title");

    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
fn title_rejects_blank_input() {
    assert_eq!(TaskTitle::new("   "), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_rejects_overlong_input() {
    let result = TaskTitle::new("x".repeat(201));

    assert!(matches!(result, Err(TaskDomainError::TitleTooLong(_))));
}

#[rstest]
fn description_rejects_blank_input() {
    assert_eq!(
        TaskDescription::new("\n\t"),
        Err(TaskDomainError::EmptyDescription)
    );
}

#[rstest]
fn checklist_text_rejects_blank_input() {
    assert_eq!(
        ChecklistText::new("  "),
        Err(TaskDomainError::EmptyChecklistText)
    );
}

#[rstest]
fn checklist_text_rejects_overlong_input() {
    let result = ChecklistText::new("x".repeat(501));

    assert!(matches!(
        result,
        Err(TaskDomainError::ChecklistTextTooLong(_))
    ));
}

#[rstest]
#[case(TaskStatus::Pending, "pending")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::Completed, "completed")]
fn status_round_trips_through_storage_form(#[case] status: TaskStatus, #[case] stored: &str) {
    assert_eq!(status.as_str(), stored);
    assert_eq!(TaskStatus::try_from(stored), Ok(status));
}

#[rstest]
fn status_parsing_normalises_case() {
    assert_eq!(
        TaskStatus::try_from(" In_Progress "),
        Ok(TaskStatus::InProgress)
    );
}

#[rstest]
fn status_parsing_rejects_unknown_values() {
    assert!(TaskStatus::try_from("done").is_err());
}

#[rstest]
#[case(TaskPriority::Low, "low")]
#[case(TaskPriority::Medium, "medium")]
#[case(TaskPriority::High, "high")]
fn priority_round_trips_through_storage_form(#[case] priority: TaskPriority, #[case] stored: &str) {
    assert_eq!(priority.as_str(), stored);
    assert_eq!(TaskPriority::try_from(stored), Ok(priority));
}

#[rstest]
fn priority_parsing_rejects_unknown_values() {
    assert!(TaskPriority::try_from("urgent").is_err());
}

#[rstest]
fn task_without_checklist_defaults_to_pending(clock: DefaultClock) -> eyre::Result<()> {
    let task = Task::new(errand_data(vec![])?, &clock);

    ensure!(task.status() == TaskStatus::Pending);
    ensure!(task.start_date().is_none());
    ensure!(task.created_at() == task.updated_at());
    Ok(())
}

#[rstest]
fn explicit_status_is_honoured_without_checklist(clock: DefaultClock) -> eyre::Result<()> {
    let mut data = errand_data(vec![])?;
    data.status = Some(TaskStatus::Completed);

    let task = Task::new(data, &clock);

    ensure!(task.status() == TaskStatus::Completed);
    ensure!(task.start_date().is_none());
    Ok(())
}

#[rstest]
fn creation_derives_status_from_checklist_over_explicit_value(
    clock: DefaultClock,
) -> eyre::Result<()> {
    let mut data = errand_data(vec![item("Buy milk", true), item("Pay bills", false)])?;
    data.status = Some(TaskStatus::Completed);

    let task = Task::new(data, &clock);

    ensure!(task.status() == TaskStatus::InProgress);
    ensure!(task.start_date() == Some(task.created_at()));
    Ok(())
}

#[rstest]
fn creation_with_untouched_checklist_is_pending(clock: DefaultClock) -> eyre::Result<()> {
    let mut data = errand_data(vec![item("Buy milk", false)])?;
    data.status = Some(TaskStatus::Completed);

    let task = Task::new(data, &clock);

    ensure!(task.status() == TaskStatus::Pending);
    ensure!(task.start_date().is_none());
    Ok(())
}

#[rstest]
fn status_change_works_while_checklist_is_empty(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![])?, &clock);

    task.change_status(TaskStatus::InProgress, &clock)?;

    ensure!(task.status() == TaskStatus::InProgress);
    ensure!(task.start_date().is_none());
    Ok(())
}

#[rstest]
fn status_change_is_rejected_once_items_exist(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![item("Buy milk", false)])?, &clock);

    let result = task.change_status(TaskStatus::Completed, &clock);
    let expected = Err(TaskDomainError::StatusNotDirectlySettable(task.id()));

    if result != expected {
        bail!("expected {expected:?}, got {result:?}");
    }
    ensure!(task.status() == TaskStatus::Pending);
    Ok(())
}

#[rstest]
fn completing_an_item_starts_the_task(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(
        errand_data(vec![item("Buy milk", false), item("Pay bills", false)])?,
        &clock,
    );
    let first = task.checklist()[0].id();

    let updated = task.set_item_completed(first, Some(true), &clock)?;

    ensure!(updated.completed());
    ensure!(task.status() == TaskStatus::InProgress);
    ensure!(task.start_date().is_some());
    Ok(())
}

#[rstest]
fn completing_every_item_completes_the_task(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(
        errand_data(vec![item("Buy milk", false), item("Pay bills", false)])?,
        &clock,
    );
    let first = task.checklist()[0].id();
    let second = task.checklist()[1].id();

    task.set_item_completed(first, Some(true), &clock)?;
    let started = task.start_date();
    task.set_item_completed(second, Some(true), &clock)?;

    ensure!(task.status() == TaskStatus::Completed);
    ensure!(task.start_date() == started);
    Ok(())
}

#[rstest]
fn patch_without_flag_keeps_item_and_progress(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(
        errand_data(vec![item("Buy milk", true), item("Pay bills", false)])?,
        &clock,
    );
    let started = task.start_date();
    let second = task.checklist()[1].id();

    let untouched = task.set_item_completed(second, None, &clock)?;

    ensure!(!untouched.completed());
    ensure!(task.status() == TaskStatus::InProgress);
    ensure!(task.start_date() == started);
    Ok(())
}

#[rstest]
fn updating_unknown_item_is_rejected(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![item("Buy milk", false)])?, &clock);
    let missing = ChecklistItemId::new();

    let result = task.set_item_completed(missing, Some(true), &clock);
    let expected = Err(TaskDomainError::ChecklistItemNotFound {
        task_id: task.id(),
        item_id: missing,
    });

    if result != expected {
        bail!("expected {expected:?}, got {result:?}");
    }
    Ok(())
}

#[rstest]
fn appending_an_item_demotes_a_completed_task(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![item("Buy milk", true)])?, &clock);
    ensure!(task.status() == TaskStatus::Completed);
    let started = task.start_date();

    let appended = task.append_checklist_item(ChecklistText::new("Pay bills")?, false, &clock);

    ensure!(task.status() == TaskStatus::InProgress);
    ensure!(task.start_date() == started);
    ensure!(task.checklist().len() == 2);
    ensure!(task.checklist()[1].id() == appended.id());
    Ok(())
}

#[rstest]
fn first_item_puts_a_manually_completed_task_under_derivation(
    clock: DefaultClock,
) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![])?, &clock);
    task.change_status(TaskStatus::Completed, &clock)?;

    task.append_checklist_item(ChecklistText::new("Buy milk")?, false, &clock);

    ensure!(task.status() == TaskStatus::Pending);
    ensure!(task.start_date().is_none());
    Ok(())
}

#[rstest]
fn full_revert_clears_start_and_recompletion_recaptures_it(
    clock: DefaultClock,
) -> eyre::Result<()> {
    let mut task = Task::new(
        errand_data(vec![item("Buy milk", true), item("Pay bills", false)])?,
        &clock,
    );
    let Some(first_start) = task.start_date() else {
        bail!("start date missing after creation with a completed item");
    };
    let first = task.checklist()[0].id();

    task.set_item_completed(first, Some(false), &clock)?;
    ensure!(task.status() == TaskStatus::Pending);
    ensure!(task.start_date().is_none());

    task.set_item_completed(first, Some(true), &clock)?;
    let Some(second_start) = task.start_date() else {
        bail!("start date missing after progress resumed");
    };
    ensure!(second_start >= first_start);
    Ok(())
}

#[rstest]
fn due_date_change_touches_the_task(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![])?, &clock);
    let created = task.created_at();
    let Some(due) = NaiveDate::from_ymd_opt(2026, 3, 31) else {
        bail!("date literal out of range");
    };

    task.change_due_date(due, &clock);

    ensure!(task.due_date() == Some(due));
    ensure!(task.updated_at() >= created);
    ensure!(task.created_at() == created);
    Ok(())
}

#[rstest]
fn assignee_replacement_is_wholesale(clock: DefaultClock) -> eyre::Result<()> {
    let mut task = Task::new(errand_data(vec![])?, &clock);
    let ada = UserId::new();
    let grace = UserId::new();

    task.replace_assignees(BTreeSet::from([ada, grace]), &clock);
    ensure!(task.is_assigned_to(ada));
    ensure!(task.is_assigned_to(grace));
    ensure!(task.assignees().len() == 2);

    task.replace_assignees(BTreeSet::from([grace]), &clock);
    ensure!(!task.is_assigned_to(ada));
    ensure!(task.is_assigned_to(grace));
    Ok(())
}
