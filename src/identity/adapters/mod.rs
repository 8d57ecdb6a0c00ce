//! Adapter implementations of the identity ports.

pub mod credential;
pub mod memory;
pub mod postgres;
pub mod token;

pub use credential::Pbkdf2CredentialHasher;
pub use memory::InMemoryUserRepository;
pub use postgres::{PostgresUserRepository, UserPgPool};
pub use token::JwtTokenIssuer;
