//! Employee directory: staff records and their lifecycle.
//!
//! The directory module is administrative bookkeeping about the people on
//! the team, independent of whether they hold a login. It follows hexagonal
//! architecture:
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
