//! Shared domain types, errors, and form-field rules for the lore wiki.
//!
//! This crate has no I/O. Both `lore-db` and `lore-api` depend on it.

pub mod error;
pub mod forms;
pub mod types;
