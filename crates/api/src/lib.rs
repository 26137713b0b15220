//! Lore wiki HTTP server library.
//!
//! Exposes the building blocks (config, state, error handling, views,
//! handlers, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
