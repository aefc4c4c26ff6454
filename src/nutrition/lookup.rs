//! Food lookup
//!
//! Resolves a recognized label to its catalog record through a [`FoodStore`].

use std::sync::Arc;

use tracing::{debug, info};

use super::catalog::description_for;
use super::error::MacroError;
use crate::models::FoodRecord;
use crate::store::FoodStore;

/// Label-to-record lookup over an injected store
#[derive(Clone)]
pub struct FoodLookup {
    store: Arc<dyn FoodStore>,
}

impl FoodLookup {
    pub fn new(store: Arc<dyn FoodStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn FoodStore> {
        &self.store
    }

    /// Fetch the record for `object_name`.
    ///
    /// Unrecognized labels fail before the store is queried.
    pub fn lookup(&self, object_name: &str) -> Result<FoodRecord, MacroError> {
        let description = description_for(object_name)
            .ok_or_else(|| MacroError::UnrecognizedFood(object_name.to_string()))?;

        debug!(food = object_name, description, "Querying food store");

        let record = self
            .store
            .find_by_description(description)?
            .ok_or_else(|| MacroError::RecordNotFound(description.to_string()))?;

        info!(
            food = %record.description,
            portions = record.food_portions.len(),
            "Found food"
        );
        Ok(record)
    }
}
