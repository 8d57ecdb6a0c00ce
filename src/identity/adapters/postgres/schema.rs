//! Diesel schema for user account persistence.
//!
//! The `users` table carries a unique index on `email`
//! (`idx_users_email_unique`); the store path maps violations of it to the
//! duplicate-email repository error.

diesel::table! {
    /// User account records.
    users (id) {
        /// Internal account identifier.
        id -> Uuid,
        /// Human-readable display name.
        #[max_length = 100]
        display_name -> Varchar,
        /// Unique login email address.
        #[max_length = 255]
        email -> Varchar,
        /// Encoded credential digest.
        #[max_length = 255]
        credential_hash -> Varchar,
        /// Access role (admin or member).
        #[max_length = 20]
        role -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
