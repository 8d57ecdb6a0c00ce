//! Diesel schema for task board persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Progress status.
        #[max_length = 20]
        status -> Varchar,
        /// Priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Timestamp of the first checklist progress, if any.
        start_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Checklist items owned by tasks; rows cascade with their task.
    checklist_items (id) {
        /// Internal item identifier.
        id -> Uuid,
        /// Owning task identifier.
        task_id -> Uuid,
        /// Item text.
        #[max_length = 500]
        text -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation-order position within the task's checklist.
        position -> Int4,
    }
}

diesel::table! {
    /// Task-to-user assignment relation.
    task_assignments (task_id, user_id) {
        /// Assigned task identifier.
        task_id -> Uuid,
        /// Assigned user identifier.
        user_id -> Uuid,
    }
}

diesel::joinable!(checklist_items -> tasks (task_id));
diesel::joinable!(task_assignments -> tasks (task_id));

diesel::allow_tables_to_appear_in_same_query!(tasks, checklist_items, task_assignments);
