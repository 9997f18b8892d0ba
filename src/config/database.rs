//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. The table is generated
//! from the entity definition with `Schema::create_table_from_entity`, so the schema always
//! matches the Rust struct without hand-written SQL.

use crate::entities::FileRecord;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, instrument};

/// Used when `DATABASE_URL` is not set. `mode=rwc` lets `SQLite` create the file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/file_registry.sqlite?mode=rwc";

const DEFAULT_DATA_DIR: &str = "data";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Connects to the database named by `DATABASE_URL` and makes sure the tables exist.
///
/// The registry bot calls this before logging in, so any failure here aborts startup.
#[instrument]
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {}", database_url);
    if database_url == DEFAULT_DATABASE_URL {
        std::fs::create_dir_all(DEFAULT_DATA_DIR)?;
    }
    let db = Database::connect(&database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates the `file_records` table if it is not there yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut file_record_table = schema.create_table_from_entity(FileRecord);
    file_record_table.if_not_exists();

    db.execute(builder.build(&file_record_table)).await?;

    Ok(())
}
