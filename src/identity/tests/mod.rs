//! Unit tests for the identity module.

mod credential_tests;
