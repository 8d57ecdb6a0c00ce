//! Domain model for user accounts and authentication.
//!
//! The identity domain models user accounts, their access roles, and the
//! opaque credential digests used to verify logins. All infrastructure
//! concerns are kept outside the domain boundary.

mod credential;
mod email;
mod error;
mod ids;
mod name;
mod role;
mod user;

pub use credential::CredentialHash;
pub use email::EmailAddress;
pub use error::{IdentityDomainError, ParseRoleError};
pub use ids::UserId;
pub use name::DisplayName;
pub use role::Role;
pub use user::{PersistedUserData, User};
