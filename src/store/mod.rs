//! Food store
//!
//! The read capability the calculator needs from the catalog, with a SQLite
//! implementation for the service and an in-memory one for tests.

mod memory;
mod sqlite;

use thiserror::Error;

use crate::db::DbError;
use crate::models::FoodRecord;

pub use memory::MemoryFoodStore;
pub use sqlite::SqliteFoodStore;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to food records
pub trait FoodStore: Send + Sync {
    /// Return the first record whose description equals `description`,
    /// compared case-insensitively.
    fn find_by_description(&self, description: &str) -> Result<Option<FoodRecord>, StoreError>;

    /// Number of records held by the store
    fn count(&self) -> Result<i64, StoreError>;
}
