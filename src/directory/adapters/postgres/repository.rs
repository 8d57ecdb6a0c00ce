//! `PostgreSQL` repository implementation for employee records.

use super::{
    models::{EmployeeRow, NewEmployeeRow},
    schema::employees,
};
use crate::directory::{
    domain::{Employee, EmployeeId, EmployeeProfile, EmployeeStatus, PersistedEmployeeData},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};
use crate::identity::domain::{DisplayName, EmailAddress};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type EmployeePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed employee repository.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: EmployeePgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: EmployeePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> EmployeeRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> EmployeeRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(EmployeeRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(EmployeeRepositoryError::persistence)?
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let employee_id = employee.id();
        let employee_email = employee.email().clone();
        let new_row = to_new_row(employee);

        self.run_blocking(move |connection| {
            diesel::insert_into(employees::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        EmployeeRepositoryError::DuplicateEmail(employee_email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        EmployeeRepositoryError::DuplicateEmployee(employee_id)
                    }
                    _ => EmployeeRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let employee_id = employee.id().into_inner();
        let employee_email = employee.email().clone();
        let name_val = employee.name().as_str().to_owned();
        let email_val = employee.email().as_str().to_owned();
        let department_val = employee.profile().department().to_owned();
        let position_val = employee.profile().position().to_owned();
        let phone_val = employee.profile().phone().to_owned();
        let status_val = employee.status().as_str().to_owned();
        let updated_val = employee.updated_at();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(employees::table.filter(employees::id.eq(employee_id)))
                    .set((
                        employees::name.eq(&name_val),
                        employees::email.eq(&email_val),
                        employees::department.eq(&department_val),
                        employees::position.eq(&position_val),
                        employees::phone.eq(&phone_val),
                        employees::status.eq(&status_val),
                        employees::updated_at.eq(updated_val),
                    ))
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(
                            DatabaseErrorKind::UniqueViolation,
                            ref info,
                        ) if is_email_unique_violation(info.as_ref()) => {
                            EmployeeRepositoryError::DuplicateEmail(employee_email.clone())
                        }
                        _ => EmployeeRepositoryError::persistence(err),
                    })?;

            if updated_count == 0 {
                return Err(EmployeeRepositoryError::NotFound(EmployeeId::from_uuid(
                    employee_id,
                )));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: EmployeeId) -> EmployeeRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(employees::table.filter(employees::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(EmployeeRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(EmployeeRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::id.eq(id.into_inner()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            row.map(row_to_employee).transpose()
        })
        .await
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> EmployeeRepositoryResult<Option<Employee>> {
        let email_str = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::email.eq(&email_str))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            row.map(row_to_employee).transpose()
        })
        .await
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        self.run_blocking(move |connection| {
            let rows = employees::table
                .order((employees::created_at.desc(), employees::id.desc()))
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)
                .map_err(EmployeeRepositoryError::persistence)?;
            rows.into_iter().map(row_to_employee).collect()
        })
        .await
    }
}

fn to_new_row(employee: &Employee) -> NewEmployeeRow {
    NewEmployeeRow {
        id: employee.id().into_inner(),
        name: employee.name().as_str().to_owned(),
        email: employee.email().as_str().to_owned(),
        department: employee.profile().department().to_owned(),
        position: employee.profile().position().to_owned(),
        phone: employee.profile().phone().to_owned(),
        status: employee.status().as_str().to_owned(),
        created_at: employee.created_at(),
        updated_at: employee.updated_at(),
    }
}

fn row_to_employee(row: EmployeeRow) -> EmployeeRepositoryResult<Employee> {
    let EmployeeRow {
        id,
        name,
        email,
        department,
        position,
        phone,
        status,
        created_at,
        updated_at,
    } = row;

    let parsed_name =
        DisplayName::new(name).map_err(EmployeeRepositoryError::invalid_persisted_data)?;
    let parsed_email =
        EmailAddress::new(email).map_err(EmployeeRepositoryError::invalid_persisted_data)?;
    let parsed_profile = EmployeeProfile::new(department, position, phone)
        .map_err(EmployeeRepositoryError::invalid_persisted_data)?;
    let parsed_status = EmployeeStatus::try_from(status.as_str())
        .map_err(EmployeeRepositoryError::invalid_persisted_data)?;

    let data = PersistedEmployeeData {
        id: EmployeeId::from_uuid(id),
        name: parsed_name,
        email: parsed_email,
        profile: parsed_profile,
        status: parsed_status,
        created_at,
        updated_at,
    };
    Ok(Employee::from_persisted(data))
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_employees_email_unique")
}
