//! Import an FNDDS JSON export into the food database
//!
//! Usage: import_foods <export.json>

use std::path::PathBuf;

use macrocalc::config::Config;
use macrocalc::db::{migrations, Database};
use macrocalc::models::parse_food_export;
use macrocalc::store::SqliteFoodStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let export_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: import_foods <export.json>")?;

    let config = Config::load()?;
    let db_path = config.database.path;
    println!("Database path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = Database::new(&db_path)?;
    database.with_conn(|conn| {
        migrations::run_migrations(conn)?;
        Ok(())
    })?;

    let contents = std::fs::read_to_string(&export_path)?;
    let records = parse_food_export(&contents)?;
    println!("Read {} foods from {}", records.len(), export_path.display());

    let store = SqliteFoodStore::new(database);
    let imported = store.import_records(&records)?;
    println!("Imported {} foods", imported);

    Ok(())
}
