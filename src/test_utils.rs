//! Shared test utilities for `DmCourier`.
//!
//! Helpers for setting up an in-memory database and seeding file records with sensible
//! defaults.

use crate::{
    core::file_record::{self, NewFileRecord},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Admin ID used by every test that needs one.
pub const TEST_ADMIN_ID: &str = "424242";

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Saves a file record as [`TEST_ADMIN_ID`].
pub async fn save_test_file(
    db: &DatabaseConnection,
    client_id: &str,
    name: &str,
    link: &str,
) -> Result<entities::file_record::Model> {
    let record = NewFileRecord::new(client_id, name, link, TEST_ADMIN_ID)?;
    file_record::save_file(db, record).await
}
