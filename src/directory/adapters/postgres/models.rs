//! Diesel row models for employee record persistence.

use super::schema::employees;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for employee records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Internal employee identifier.
    pub id: uuid::Uuid,
    /// Employee name.
    pub name: String,
    /// Unique contact email address.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// Contact phone number.
    pub phone: String,
    /// Employment status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    /// Internal employee identifier.
    pub id: uuid::Uuid,
    /// Employee name.
    pub name: String,
    /// Unique contact email address.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// Contact phone number.
    pub phone: String,
    /// Employment status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
