//! In-memory food store used by tests and local runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{FoodStore, StoreError};
use crate::models::FoodRecord;

/// In-memory food store.
///
/// Counts lookups so callers can assert whether the store was queried, and
/// can be put into a failing state to simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct MemoryFoodStore {
    records: Vec<FoodRecord>,
    failure: Option<String>,
    queries: AtomicUsize,
}

impl MemoryFoodStore {
    pub fn new(records: Vec<FoodRecord>) -> Self {
        Self {
            records,
            failure: None,
            queries: AtomicUsize::new(0),
        }
    }

    /// A store whose every query fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.into()),
            queries: AtomicUsize::new(0),
        }
    }

    /// Number of `find_by_description` calls so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl FoodStore for MemoryFoodStore {
    fn find_by_description(&self, description: &str) -> Result<Option<FoodRecord>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(StoreError::Unavailable(message.clone()));
        }

        let wanted = description.to_lowercase();
        Ok(self
            .records
            .iter()
            .find(|r| r.description.to_lowercase() == wanted)
            .cloned())
    }

    fn count(&self) -> Result<i64, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Unavailable(message.clone()));
        }
        Ok(self.records.len() as i64)
    }
}
