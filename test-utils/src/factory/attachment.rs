//! Attachment factory for creating test attachment entities.
//!
//! Only the database row is created; tests that read the file back must write
//! it to `filepath` themselves.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attachments on a communication.
pub struct AttachmentFactory<'a> {
    db: &'a DatabaseConnection,
    communication_id: i32,
    filename: String,
    filetype: String,
    filepath: String,
}

impl<'a> AttachmentFactory<'a> {
    /// Creates a new AttachmentFactory with default values.
    ///
    /// Defaults:
    /// - filename: `"file{id}.txt"`
    /// - filetype: `"text/plain"`
    /// - filepath: `"uploads/file{id}.txt"`
    pub fn new(db: &'a DatabaseConnection, communication_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            communication_id,
            filename: format!("file{}.txt", id),
            filetype: "text/plain".to_string(),
            filepath: format!("uploads/file{}.txt", id),
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = filetype.into();
        self
    }

    pub fn filepath(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = filepath.into();
        self
    }

    /// Builds and inserts the attachment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attachment::Model)` - Created attachment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attachment::Model, DbErr> {
        entity::attachment::ActiveModel {
            communication_id: ActiveValue::Set(self.communication_id),
            filename: ActiveValue::Set(self.filename),
            filetype: ActiveValue::Set(self.filetype),
            filepath: ActiveValue::Set(self.filepath),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attachment with default values for the given communication.
pub async fn create_attachment(
    db: &DatabaseConnection,
    communication_id: i32,
) -> Result<entity::attachment::Model, DbErr> {
    AttachmentFactory::new(db, communication_id).build().await
}
