//! SQLite-backed food store over the `foods` document table.

use tracing::info;

use super::{FoodStore, StoreError};
use crate::db::{Database, DbResult};
use crate::models::FoodRecord;

/// Food store backed by the `foods` table
#[derive(Clone)]
pub struct SqliteFoodStore {
    database: Database,
}

impl SqliteFoodStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Insert a single record
    pub fn insert(&self, record: &FoodRecord) -> DbResult<i64> {
        self.database.with_conn(|conn| record.insert(conn))
    }

    /// Insert records in one transaction; nothing is kept if any insert fails
    pub fn import_records(&self, records: &[FoodRecord]) -> DbResult<usize> {
        self.database.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            for record in records {
                record.insert(&tx)?;
            }
            tx.commit()?;
            info!(count = records.len(), "Imported food records");
            Ok(records.len())
        })
    }
}

impl FoodStore for SqliteFoodStore {
    fn find_by_description(&self, description: &str) -> Result<Option<FoodRecord>, StoreError> {
        let record = self
            .database
            .with_conn(|conn| FoodRecord::find_by_description(conn, description))?;
        Ok(record)
    }

    fn count(&self) -> Result<i64, StoreError> {
        Ok(self.database.with_conn(FoodRecord::count)?)
    }
}
