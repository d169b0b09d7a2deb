//! Communication factory for creating test communication entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test communications with a contact.
pub struct CommunicationFactory<'a> {
    db: &'a DatabaseConnection,
    contact_id: i32,
    message_type: String,
    content: Option<String>,
    timestamp: DateTime<Utc>,
}

impl<'a> CommunicationFactory<'a> {
    /// Creates a new CommunicationFactory with default values.
    ///
    /// Defaults:
    /// - message_type: `"email"`
    /// - content: `"Hello"`
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection, contact_id: i32) -> Self {
        Self {
            db,
            contact_id,
            message_type: "email".to_string(),
            content: Some("Hello".to_string()),
            timestamp: Utc::now(),
        }
    }

    pub fn message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = message_type.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the communication entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::communication::Model)` - Created communication entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::communication::Model, DbErr> {
        entity::communication::ActiveModel {
            contact_id: ActiveValue::Set(self.contact_id),
            message_type: ActiveValue::Set(self.message_type),
            content: ActiveValue::Set(self.content),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a communication with default values for the given contact.
pub async fn create_communication(
    db: &DatabaseConnection,
    contact_id: i32,
) -> Result<entity::communication::Model, DbErr> {
    CommunicationFactory::new(db, contact_id).build().await
}
