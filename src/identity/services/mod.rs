//! Application services for the identity module.

mod auth;
mod roster;

pub use auth::{AuthError, AuthResult, AuthService, LoginOutcome, LoginRequest, RegisterUserRequest};
pub use roster::{RosterError, RosterResult, TeamRosterService};
