//! File record business logic - saving and looking up client files.
//!
//! Records are insert-only. Listing is newest first, and name lookups are case-insensitive
//! exact matches scoped to one client.

use crate::{
    core::link::normalize_drive_link,
    entities::{FileRecord, file_record},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// A validated record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRecord {
    client_id: String,
    name: String,
    link: String,
    saved_by: String,
}

impl NewFileRecord {
    /// Validates the fields and normalizes the link.
    ///
    /// Every field is trimmed and must be non-empty.
    pub fn new(client_id: &str, name: &str, link: &str, saved_by: &str) -> Result<Self> {
        let client_id = non_empty("client_id", client_id)?;
        let name = non_empty("name", name)?;
        let link = normalize_drive_link(&non_empty("link", link)?);
        let saved_by = non_empty("saved_by", saved_by)?;
        Ok(Self {
            client_id,
            name,
            link,
            saved_by,
        })
    }

    /// Client the file belongs to
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// File label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized link
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidRecord { field });
    }
    Ok(value.to_string())
}

/// Inserts a record, stamping both timestamps with the current time.
#[instrument(skip(db))]
pub async fn save_file(db: &DatabaseConnection, record: NewFileRecord) -> Result<file_record::Model> {
    let now = Utc::now();
    let model = file_record::ActiveModel {
        client_id: Set(record.client_id),
        name: Set(record.name),
        link: Set(record.link),
        saved_by: Set(record.saved_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = model.insert(db).await?;
    debug!(id = saved.id, "File record saved");
    Ok(saved)
}

/// Lists every record of a client, newest first.
#[instrument(skip(db))]
pub async fn list_files_for_client(
    db: &DatabaseConnection,
    client_id: &str,
) -> Result<Vec<file_record::Model>> {
    FileRecord::find()
        .filter(file_record::Column::ClientId.eq(client_id))
        .order_by_desc(file_record::Column::CreatedAt)
        .order_by_desc(file_record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a client's record by name, ignoring case. The newest wins when names repeat.
///
/// Names are folded with Unicode lowercase on our side rather than `SQLite`'s `LOWER`, which
/// only folds ASCII.
#[instrument(skip(db))]
pub async fn find_file_by_name(
    db: &DatabaseConnection,
    client_id: &str,
    name: &str,
) -> Result<Option<file_record::Model>> {
    let wanted = name.to_lowercase();
    let files = list_files_for_client(db, client_id).await?;
    Ok(files
        .into_iter()
        .find(|file| file.name.to_lowercase() == wanted))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_new_file_record_validation() {
        assert!(matches!(
            NewFileRecord::new("", "Logo", "https://x", "admin"),
            Err(Error::InvalidRecord { field: "client_id" })
        ));
        assert!(matches!(
            NewFileRecord::new("1", "   ", "https://x", "admin"),
            Err(Error::InvalidRecord { field: "name" })
        ));
        assert!(matches!(
            NewFileRecord::new("1", "Logo", "", "admin"),
            Err(Error::InvalidRecord { field: "link" })
        ));
        assert!(matches!(
            NewFileRecord::new("1", "Logo", "https://x", " "),
            Err(Error::InvalidRecord { field: "saved_by" })
        ));
    }

    #[test]
    fn test_new_file_record_normalizes_link() {
        let record = NewFileRecord::new(
            "123456",
            "Logo",
            "https://drive.google.com/file/d/ABC123/view",
            "admin",
        )
        .unwrap();
        assert_eq!(record.client_id(), "123456");
        assert_eq!(record.name(), "Logo");
        assert_eq!(
            record.link(),
            "https://drive.google.com/uc?export=download&id=ABC123"
        );
    }

    #[tokio::test]
    async fn test_save_file_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let saved = save_test_file(&db, "123456", "Logo", "https://example.com/logo.png").await?;

        assert_eq!(saved.client_id, "123456");
        assert_eq!(saved.name, "Logo");
        assert_eq!(saved.link, "https://example.com/logo.png");
        assert_eq!(saved.saved_by, TEST_ADMIN_ID);
        assert_eq!(saved.created_at, saved.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_files_newest_first_and_scoped() -> Result<()> {
        let db = setup_test_db().await?;

        save_test_file(&db, "1", "First", "https://example.com/1").await?;
        save_test_file(&db, "2", "Other", "https://example.com/x").await?;
        save_test_file(&db, "1", "Second", "https://example.com/2").await?;
        save_test_file(&db, "1", "Third", "https://example.com/3").await?;

        let names: Vec<String> = list_files_for_client(&db, "1")
            .await?
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["Third", "Second", "First"]);

        assert!(list_files_for_client(&db, "3").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_find_file_by_name_ignores_case() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_file(&db, "1", "Logo", "https://example.com/logo").await?;

        let found = find_file_by_name(&db, "1", "LOGO").await?;
        assert_eq!(found.unwrap().link, "https://example.com/logo");

        assert!(find_file_by_name(&db, "1", "Log").await?.is_none());
        assert!(find_file_by_name(&db, "2", "Logo").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_find_file_by_name_folds_non_ascii() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_file(&db, "1", "Élan", "https://example.com/elan").await?;

        for query in ["Élan", "élan", "ÉLAN"] {
            let found = find_file_by_name(&db, "1", query).await?;
            assert_eq!(found.unwrap().name, "Élan", "{query}");
        }
        assert!(find_file_by_name(&db, "1", "Elan").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_find_file_by_name_prefers_newest_duplicate() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_file(&db, "1", "Logo", "https://example.com/old").await?;
        save_test_file(&db, "1", "logo", "https://example.com/new").await?;

        let found = find_file_by_name(&db, "1", "Logo").await?.unwrap();
        assert_eq!(found.link, "https://example.com/new");
        Ok(())
    }
}
