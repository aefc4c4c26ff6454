//! Request-level operations behind the HTTP handlers.

pub mod macros;
pub mod status;
