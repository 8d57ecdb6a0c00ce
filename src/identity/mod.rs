//! User identity: accounts, roles, credentials, and session tokens.
//!
//! The identity module owns the user aggregate and everything needed to
//! authenticate one: credential hashing, signed session tokens, and the
//! repository that stores accounts. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port traits in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Application services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
