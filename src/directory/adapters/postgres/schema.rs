//! Diesel schema for employee record persistence.
//!
//! The `employees` table carries a unique index on `email`
//! (`idx_employees_email_unique`); store and update paths map violations of
//! it to the duplicate-email repository error.

diesel::table! {
    /// Employee directory records.
    employees (id) {
        /// Internal employee identifier.
        id -> Uuid,
        /// Employee name.
        #[max_length = 100]
        name -> Varchar,
        /// Unique contact email address.
        #[max_length = 255]
        email -> Varchar,
        /// Department name.
        #[max_length = 100]
        department -> Varchar,
        /// Position title.
        #[max_length = 100]
        position -> Varchar,
        /// Contact phone number.
        #[max_length = 30]
        phone -> Varchar,
        /// Employment status (active, inactive, or terminated).
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
