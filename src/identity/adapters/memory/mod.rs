//! In-memory adapters for the identity ports.

mod user;

pub use user::InMemoryUserRepository;
