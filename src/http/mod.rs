//! HTTP interface
//!
//! Axum router exposing the macro calculator and status endpoints.

mod handlers;
mod server;

pub use handlers::ErrorBody;
pub use server::{router, serve, AppState};
