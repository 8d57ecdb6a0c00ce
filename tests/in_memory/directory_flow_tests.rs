//! Integration tests for the employee directory lifecycle.

use std::sync::Arc;

use gaffer::directory::{
    adapters::InMemoryEmployeeRepository,
    domain::EmployeeStatus,
    ports::EmployeeRepositoryError,
    services::{CreateEmployeeRequest, DirectoryError, UpdateEmployeeRequest},
};
use rstest::rstest;

use crate::in_memory::helpers::{directory_service, employees};

fn maja_record() -> CreateEmployeeRequest {
    CreateEmployeeRequest::new(
        "Maja Novak",
        "maja@example.com",
        "Engineering",
        "Backend Developer",
        "+386 40 111 222",
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_record_survives_a_full_lifecycle(employees: Arc<InMemoryEmployeeRepository>) {
    let directory = directory_service(&employees);

    let created = directory
        .create_employee(maja_record())
        .await
        .expect("creation should succeed");
    assert_eq!(created.status(), EmployeeStatus::Active);

    let updated = directory
        .update_employee(
            created.id(),
            UpdateEmployeeRequest::new()
                .with_position("Senior Backend Developer")
                .with_status(EmployeeStatus::Inactive),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.profile().position(), "Senior Backend Developer");
    assert_eq!(updated.status(), EmployeeStatus::Inactive);

    let listed = directory
        .list_employees()
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);

    directory
        .delete_employee(created.id())
        .await
        .expect("deletion should succeed");

    let lookup = directory.get_employee(created.id()).await;
    assert!(matches!(
        lookup,
        Err(DirectoryError::Repository(
            EmployeeRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_uniqueness_holds_across_create_and_update(
    employees: Arc<InMemoryEmployeeRepository>,
) {
    let directory = directory_service(&employees);

    directory
        .create_employee(maja_record())
        .await
        .expect("creation should succeed");
    let tomaz = directory
        .create_employee(CreateEmployeeRequest::new(
            "Tomaž Kranjc",
            "tomaz@example.com",
            "Support",
            "Support Agent",
            "+386 40 333 444",
        ))
        .await
        .expect("creation should succeed");

    let conflicting_create = directory
        .create_employee(CreateEmployeeRequest::new(
            "Maja Again",
            "maja@example.com",
            "Sales",
            "Account Manager",
            "+386 40 555 666",
        ))
        .await;
    assert!(matches!(
        conflicting_create,
        Err(DirectoryError::Repository(
            EmployeeRepositoryError::DuplicateEmail(_)
        ))
    ));

    let conflicting_update = directory
        .update_employee(
            tomaz.id(),
            UpdateEmployeeRequest::new().with_email("maja@example.com"),
        )
        .await;
    assert!(matches!(
        conflicting_update,
        Err(DirectoryError::Repository(
            EmployeeRepositoryError::DuplicateEmail(_)
        ))
    ));
}
