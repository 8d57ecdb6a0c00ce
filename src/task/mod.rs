//! Tasks, checklists, and assignment-scoped retrieval.
//!
//! The task module owns the task aggregate: title, description, priority,
//! due date, checklist items, and the set of assigned users. Task status and
//! start date are derived from the checklist whenever the task has items;
//! only checklist-free tasks accept a status directly. It follows hexagonal
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
