use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::communication::CommunicationRepository,
    error::AppError,
    model::{
        communication::{Communication, CommunicationParam, CommunicationWithAttachments},
        pagination::{Page, PageRequest},
        patch::{require_fields, Patchable},
    },
    storage::UploadStore,
};

/// Number of communications shown on the dashboard.
pub const RECENT_LIMIT: u64 = 10;

pub struct CommunicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of communications across all of the user's contacts, newest first.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        request: PageRequest,
    ) -> Result<Page<Communication>, AppError> {
        let (communications, total) = CommunicationRepository::new(self.db)
            .get_by_user_paginated(user_id, request.index(), request.per_page)
            .await?;

        Ok(Page::new(communications, request, total))
    }

    pub async fn get(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<CommunicationWithAttachments, AppError> {
        CommunicationRepository::new(self.db)
            .get_with_attachments_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Communication not found".to_string()))
    }

    /// Logs a communication with one of the user's contacts.
    ///
    /// `data` must name the contact in `contact_id`; the remaining fields go
    /// through the communication allow-list.
    ///
    /// # Returns
    /// - `Ok(Communication)` - Created communication
    /// - `Err(AppError::BadRequest)` - Missing or mistyped fields
    /// - `Err(AppError::NotFound)` - The contact does not exist or is not the user's
    pub async fn create(
        &self,
        user_id: i32,
        data: &Map<String, Value>,
    ) -> Result<Communication, AppError> {
        require_fields(data, &["contact_id", "message_type"])?;

        let contact_id = data
            .get("contact_id")
            .and_then(Value::as_i64)
            .and_then(|id| i32::try_from(id).ok())
            .ok_or_else(|| {
                AppError::BadRequest("Invalid value for field 'contact_id'".to_string())
            })?;

        let mut param = CommunicationParam::default();
        param.apply_patch(data, CommunicationParam::ALLOWED_FIELDS)?;
        param.validate()?;

        let repo = CommunicationRepository::new(self.db);
        let contact = repo
            .find_contact_for_user(contact_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

        Ok(repo.create(&contact, param).await?)
    }

    /// Deletes an owned communication, its attachments and their files.
    pub async fn delete(
        &self,
        id: i32,
        user_id: i32,
        uploads: &UploadStore,
    ) -> Result<(), AppError> {
        let repo = CommunicationRepository::new(self.db);

        let communication = repo
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Communication not found".to_string()))?;

        let filepaths = repo.delete(communication.id).await?;
        uploads.remove_all(&filepaths).await;

        Ok(())
    }
}
