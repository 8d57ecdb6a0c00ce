//! In-memory repository for employee record tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Employee, EmployeeId},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};
use crate::identity::domain::EmailAddress;

/// Thread-safe in-memory employee repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<InMemoryEmployeeState>>,
}

#[derive(Debug, Default)]
struct InMemoryEmployeeState {
    employees: HashMap<EmployeeId, Employee>,
    email_index: HashMap<EmailAddress, EmployeeId>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory employee repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.employees.contains_key(&employee.id()) {
            return Err(EmployeeRepositoryError::DuplicateEmployee(employee.id()));
        }

        if state.email_index.contains_key(employee.email()) {
            return Err(EmployeeRepositoryError::DuplicateEmail(
                employee.email().clone(),
            ));
        }

        state
            .email_index
            .insert(employee.email().clone(), employee.id());
        state.employees.insert(employee.id(), employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_email = state
            .employees
            .get(&employee.id())
            .ok_or(EmployeeRepositoryError::NotFound(employee.id()))?
            .email()
            .clone();

        if *employee.email() != old_email {
            if let Some(&indexed_id) = state.email_index.get(employee.email())
                && indexed_id != employee.id()
            {
                return Err(EmployeeRepositoryError::DuplicateEmail(
                    employee.email().clone(),
                ));
            }
            state.email_index.remove(&old_email);
            state
                .email_index
                .insert(employee.email().clone(), employee.id());
        }

        state.employees.insert(employee.id(), employee.clone());
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .employees
            .remove(&id)
            .ok_or(EmployeeRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email());
        Ok(())
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.employees.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let employee = state
            .email_index
            .get(email)
            .and_then(|id| state.employees.get(id))
            .cloned();
        Ok(employee)
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut records: Vec<Employee> = state.employees.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().into_inner().cmp(&a.id().into_inner()))
        });
        Ok(records)
    }
}
