use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::{
        contact::{Contact, ContactParam},
        pagination::{Page, PageRequest},
        patch::{require_fields, Patchable},
    },
    storage::UploadStore,
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the user's contacts ordered by name.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        request: PageRequest,
    ) -> Result<Page<Contact>, AppError> {
        let (contacts, total) = ContactRepository::new(self.db)
            .get_by_user_paginated(user_id, request.index(), request.per_page)
            .await?;

        Ok(Page::new(contacts, request, total))
    }

    pub async fn get(&self, id: i32, user_id: i32) -> Result<Contact, AppError> {
        ContactRepository::new(self.db)
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }

    pub async fn create(
        &self,
        user_id: i32,
        data: &Map<String, Value>,
    ) -> Result<Contact, AppError> {
        require_fields(data, &["name"])?;

        let mut param = ContactParam::default();
        param.apply_patch(data, ContactParam::ALLOWED_FIELDS)?;
        param.validate()?;

        Ok(ContactRepository::new(self.db)
            .create(user_id, param)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        data: &Map<String, Value>,
    ) -> Result<Contact, AppError> {
        let contact = self.get(id, user_id).await?;

        let mut param = contact.to_param();
        param.apply_patch(data, ContactParam::ALLOWED_FIELDS)?;
        param.validate()?;

        Ok(ContactRepository::new(self.db)
            .update(contact.id, param)
            .await?)
    }

    /// Deletes an owned contact with its communications and attachment files.
    pub async fn delete(
        &self,
        id: i32,
        user_id: i32,
        uploads: &UploadStore,
    ) -> Result<(), AppError> {
        let contact = self.get(id, user_id).await?;

        let filepaths = ContactRepository::new(self.db).delete(contact.id).await?;
        uploads.remove_all(&filepaths).await;

        Ok(())
    }
}
