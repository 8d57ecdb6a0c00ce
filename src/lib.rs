//! Gaffer: team task-management backend.
//!
//! This crate provides the core functionality for running a small team's
//! task board: user accounts with role-based access, an employee directory,
//! and tasks whose status is derived from checklist progress.
//!
//! # Architecture
//!
//! Gaffer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, hashing, tokens)
//!
//! # Modules
//!
//! - [`identity`]: User accounts, credentials, and session tokens
//! - [`directory`]: Employee records and their lifecycle
//! - [`task`]: Tasks, checklists, and checklist-driven status derivation
//! - [`bootstrap`]: Idempotent startup seeding

pub mod bootstrap;
pub mod directory;
pub mod identity;
pub mod task;
