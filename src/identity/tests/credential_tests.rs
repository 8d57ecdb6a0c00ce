//! Unit tests for the PBKDF2 credential hasher.

use crate::identity::adapters::Pbkdf2CredentialHasher;
use crate::identity::domain::CredentialHash;
use crate::identity::ports::{CredentialHasher, CredentialHasherError};
use rstest::{fixture, rstest};

/// Low iteration count keeps derivation fast in tests; the encoded form is
/// identical to production output.
#[fixture]
fn hasher() -> Pbkdf2CredentialHasher {
    Pbkdf2CredentialHasher::with_iterations(1_000)
}

#[rstest]
fn hash_then_verify_accepts_matching_password(hasher: Pbkdf2CredentialHasher) {
    let digest = hasher.hash("correct horse").expect("hashing should succeed");

    let matches = hasher
        .verify("correct horse", &digest)
        .expect("verification should succeed");

    assert!(matches);
}

#[rstest]
fn verify_rejects_wrong_password(hasher: Pbkdf2CredentialHasher) {
    let digest = hasher.hash("correct horse").expect("hashing should succeed");

    let matches = hasher
        .verify("battery staple", &digest)
        .expect("verification should succeed");

    assert!(!matches);
}

#[rstest]
fn repeated_hashing_salts_independently(hasher: Pbkdf2CredentialHasher) {
    let first = hasher.hash("same password").expect("hashing should succeed");
    let second = hasher.hash("same password").expect("hashing should succeed");

    assert_ne!(first, second);
}

#[rstest]
fn encoded_digest_is_self_describing(hasher: Pbkdf2CredentialHasher) {
    let digest = hasher.hash("any password").expect("hashing should succeed");

    let mut sections = digest.as_str().split('$');
    assert_eq!(sections.next(), Some("pbkdf2-sha256"));
    assert_eq!(sections.next(), Some("1000"));
    assert!(sections.next().is_some_and(|salt| !salt.is_empty()));
    assert!(sections.next().is_some_and(|key| !key.is_empty()));
    assert!(sections.next().is_none());
}

#[rstest]
fn verify_honours_iteration_count_in_digest(hasher: Pbkdf2CredentialHasher) {
    let stronger = Pbkdf2CredentialHasher::with_iterations(2_000);
    let digest = stronger.hash("portable").expect("hashing should succeed");

    let matches = hasher
        .verify("portable", &digest)
        .expect("verification should succeed");

    assert!(matches);
}

#[rstest]
#[case("pbkdf2-sha256$notanumber$c2FsdA==$a2V5")]
#[case("pbkdf2-sha256$1000$!!!$a2V5")]
#[case("pbkdf2-sha256$1000$c2FsdA==")]
#[case("pbkdf2-sha256$1000$c2FsdA==$a2V5$extra")]
fn verify_rejects_malformed_digests(hasher: Pbkdf2CredentialHasher, #[case] stored: &str) {
    let digest = CredentialHash::new(stored).expect("non-empty digest");

    let result = hasher.verify("irrelevant", &digest);

    assert!(matches!(result, Err(CredentialHasherError::MalformedHash(_))));
}

#[rstest]
fn verify_rejects_unknown_scheme(hasher: Pbkdf2CredentialHasher) {
    let digest = CredentialHash::new("argon2id$1$c2FsdA==$a2V5").expect("non-empty digest");

    let result = hasher.verify("irrelevant", &digest);

    assert_eq!(
        result,
        Err(CredentialHasherError::UnsupportedScheme("argon2id".to_owned()))
    );
}

#[rstest]
fn zero_iteration_configuration_is_raised_to_one(hasher: Pbkdf2CredentialHasher) {
    let degenerate = Pbkdf2CredentialHasher::with_iterations(0);
    let digest = degenerate.hash("pw").expect("hashing should succeed");

    assert!(digest.as_str().starts_with("pbkdf2-sha256$1$"));
    assert!(hasher.verify("pw", &digest).expect("verification should succeed"));
}
