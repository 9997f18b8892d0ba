//! File record entity - A link saved by the admin on behalf of a client.
//!
//! Rows are only ever inserted. `name` is not unique, and lookups by name are
//! case-insensitive at query time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// File record database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "file_records")]
pub struct Model {
    /// Unique identifier for the record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the client the file belongs to
    pub client_id: String,
    /// Label the client uses to fetch the file
    pub name: String,
    /// Stored link, already normalized to a direct download when possible
    pub link: String,
    /// Discord user ID of the admin who saved the record
    pub saved_by: String,
    /// When the record was saved
    pub created_at: DateTimeUtc,
    /// Mirrors `created_at`; records are never edited
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
