//! Integration tests for registration, login, and admin seeding.

use std::sync::Arc;

use gaffer::bootstrap::{AdminSeedSpec, seed_default_admin};
use gaffer::identity::{
    adapters::{InMemoryUserRepository, Pbkdf2CredentialHasher},
    domain::Role,
    ports::{TokenIssuer, UserRepository},
    services::{AuthError, LoginRequest, TeamRosterService},
};
use mockable::DefaultClock;
use rstest::rstest;

use crate::in_memory::helpers::{
    TEST_PASSWORD, auth_service, register_member, test_issuer, users,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_member_logs_in_and_the_token_decodes(users: Arc<InMemoryUserRepository>) {
    let auth = auth_service(&users);
    let registered = register_member(&auth, "Ada Lovelace", "ada@example.com").await;

    let outcome = auth
        .login(LoginRequest::new("ada@example.com", TEST_PASSWORD))
        .await
        .expect("login should succeed");

    let claims = test_issuer()
        .decode(&outcome.token.token)
        .expect("token should decode");

    assert_eq!(claims.user_id, registered.id());
    assert_eq!(claims.email.as_str(), "ada@example.com");
    assert_eq!(claims.role, Role::Member);
    assert_eq!(
        claims.expires_at.timestamp(),
        outcome.token.expires_at.timestamp()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_rejects_a_wrong_password(users: Arc<InMemoryUserRepository>) {
    let auth = auth_service(&users);
    register_member(&auth, "Ada Lovelace", "ada@example.com").await;

    let result = auth
        .login(LoginRequest::new("ada@example.com", "wrong-password"))
        .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tampered_token_fails_verification(users: Arc<InMemoryUserRepository>) {
    let auth = auth_service(&users);
    register_member(&auth, "Ada Lovelace", "ada@example.com").await;

    let outcome = auth
        .login(LoginRequest::new("ada@example.com", TEST_PASSWORD))
        .await
        .expect("login should succeed");

    let mut tampered = outcome.token.token;
    tampered.push('x');

    let result = test_issuer().decode(&tampered);

    assert!(result.is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_admin_can_log_in(users: Arc<InMemoryUserRepository>) {
    let hasher = Pbkdf2CredentialHasher::with_iterations(1_000);
    let spec = AdminSeedSpec::new("Root Admin", "admin@example.com", "change-me-soon");

    let created = seed_default_admin(&*users, &hasher, &DefaultClock, spec)
        .await
        .expect("seeding should succeed");
    assert!(created);

    let auth = auth_service(&users);
    let outcome = auth
        .login(LoginRequest::new("admin@example.com", "change-me-soon"))
        .await
        .expect("seeded admin should log in");

    assert_eq!(outcome.user.role(), Role::Admin);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_seeding_leaves_one_admin(users: Arc<InMemoryUserRepository>) {
    let hasher = Pbkdf2CredentialHasher::with_iterations(1_000);
    let spec = AdminSeedSpec::new("Root Admin", "admin@example.com", "change-me-soon");

    let first = seed_default_admin(&*users, &hasher, &DefaultClock, spec.clone())
        .await
        .expect("seeding should succeed");
    let second = seed_default_admin(&*users, &hasher, &DefaultClock, spec)
        .await
        .expect("repeat seeding should succeed");

    assert!(first);
    assert!(!second);

    let admins = users
        .list_by_role(Role::Admin)
        .await
        .expect("listing should succeed");
    assert_eq!(admins.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_lists_members_but_not_the_seeded_admin(users: Arc<InMemoryUserRepository>) {
    let hasher = Pbkdf2CredentialHasher::with_iterations(1_000);
    seed_default_admin(
        &*users,
        &hasher,
        &DefaultClock,
        AdminSeedSpec::new("Root Admin", "admin@example.com", "change-me-soon"),
    )
    .await
    .expect("seeding should succeed");

    let auth = auth_service(&users);
    register_member(&auth, "Ada Lovelace", "ada@example.com").await;
    register_member(&auth, "Grace Hopper", "grace@example.com").await;

    let roster = TeamRosterService::new(Arc::clone(&users));
    let members = roster
        .list_team_members()
        .await
        .expect("listing should succeed");

    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|user| user.role() == Role::Member));
}
