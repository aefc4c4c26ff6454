//! Macro Calculator
//!
//! HTTP service converting estimated food volumes into macronutrients.

use std::sync::Arc;

use macrocalc::config::Config;
use macrocalc::db::{self, Database};
use macrocalc::http::{self, AppState};
use macrocalc::store::SqliteFoodStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrocalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    macrocalc::build_info::print_startup_banner();

    let config = Config::load()?;
    let db_path = config.database.path.clone();
    info!(path = %db_path.display(), "Opening food database");

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = Database::new(&db_path)?;
    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        info!(version, "Database schema ready");
        Ok(())
    })?;

    let store = SqliteFoodStore::new(database);
    let state = AppState::new(Arc::new(store), db_path);

    let listener = TcpListener::bind(config.bind_address()).await?;
    http::serve(listener, state).await?;

    Ok(())
}
