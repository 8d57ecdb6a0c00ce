//! Port traits for the identity module.
//!
//! Ports define the contracts the identity services depend on: account
//! persistence, credential hashing, and session-token issuance. Adapters
//! provide concrete implementations.

pub mod credential;
pub mod repository;
pub mod token;

pub use credential::{CredentialHasher, CredentialHasherError};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use token::{AccessToken, TokenClaims, TokenIssuer, TokenIssuerError};

#[cfg(test)]
pub use credential::MockCredentialHasher;
#[cfg(test)]
pub use repository::MockUserRepository;
