//! Database module
//!
//! Handles the SQLite connection pool and migrations for the food catalog.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
