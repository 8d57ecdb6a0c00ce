//! Diesel row models for user account persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Internal account identifier.
    pub id: uuid::Uuid,
    /// Human-readable display name.
    pub display_name: String,
    /// Unique login email address.
    pub email: String,
    /// Encoded credential digest.
    pub credential_hash: String,
    /// Access role.
    pub role: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for user account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Internal account identifier.
    pub id: uuid::Uuid,
    /// Human-readable display name.
    pub display_name: String,
    /// Unique login email address.
    pub email: String,
    /// Encoded credential digest.
    pub credential_hash: String,
    /// Access role.
    pub role: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
