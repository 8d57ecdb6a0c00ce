//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::Duration;
use gaffer::directory::{
    adapters::InMemoryEmployeeRepository, services::EmployeeDirectoryService,
};
use gaffer::identity::{
    adapters::{InMemoryUserRepository, JwtTokenIssuer, Pbkdf2CredentialHasher},
    domain::User,
    services::{AuthService, RegisterUserRequest},
};
use gaffer::task::{adapters::InMemoryTaskRepository, services::TaskBoardService};
use mockable::DefaultClock;
use rstest::fixture;

/// Password used for every account registered through the helpers.
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Authentication service wired to in-memory adapters.
pub type TestAuthService =
    AuthService<InMemoryUserRepository, Pbkdf2CredentialHasher, JwtTokenIssuer, DefaultClock>;

/// Task board service wired to in-memory adapters.
pub type TestBoardService =
    TaskBoardService<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>;

/// Directory service wired to in-memory adapters.
pub type TestDirectoryService = EmployeeDirectoryService<InMemoryEmployeeRepository, DefaultClock>;

/// Provides a fresh user repository for each test.
#[fixture]
pub fn users() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

/// Provides a fresh task repository for each test.
#[fixture]
pub fn tasks() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::new())
}

/// Provides a fresh employee repository for each test.
#[fixture]
pub fn employees() -> Arc<InMemoryEmployeeRepository> {
    Arc::new(InMemoryEmployeeRepository::new())
}

/// Builds a token issuer signing with the suite-wide test secret.
///
/// Every issuer built here verifies tokens issued by any other, so tests can
/// decode a token without holding the exact instance that signed it.
pub fn test_issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(b"in-memory-integration-secret", Duration::hours(8))
}

/// Builds an authentication service over the given user repository.
pub fn auth_service(users: &Arc<InMemoryUserRepository>) -> TestAuthService {
    AuthService::new(
        Arc::clone(users),
        Arc::new(Pbkdf2CredentialHasher::with_iterations(1_000)),
        Arc::new(test_issuer()),
        Arc::new(DefaultClock),
    )
}

/// Builds a task board service over the given repositories.
pub fn board_service(
    tasks: &Arc<InMemoryTaskRepository>,
    users: &Arc<InMemoryUserRepository>,
) -> TestBoardService {
    TaskBoardService::new(Arc::clone(tasks), Arc::clone(users), Arc::new(DefaultClock))
}

/// Builds a directory service over the given employee repository.
pub fn directory_service(employees: &Arc<InMemoryEmployeeRepository>) -> TestDirectoryService {
    EmployeeDirectoryService::new(Arc::clone(employees), Arc::new(DefaultClock))
}

/// Registers a member account with the shared test password.
///
/// # Panics
///
/// Panics when registration fails, which indicates a broken test setup.
pub async fn register_member(auth: &TestAuthService, name: &str, email: &str) -> User {
    auth.register(RegisterUserRequest::new(name, email, TEST_PASSWORD))
        .await
        .expect("registration should succeed")
}
