use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{attachment::AttachmentRepository, communication::CommunicationRepository},
    error::AppError,
    model::attachment::{Attachment, CreateAttachmentParam, UploadedFile},
    storage::UploadStore,
    util::file::allowed_file,
};

pub struct AttachmentService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> AttachmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Stores an uploaded file and attaches it to one of the user's communications.
    ///
    /// # Arguments
    /// - `user_id` - Principal performing the upload
    /// - `communication_id` - Communication to attach the file to
    /// - `file` - Uploaded file as received
    /// - `allowed_extensions` - Accepted lowercase extensions
    ///
    /// # Returns
    /// - `Ok(Attachment)` - Recorded attachment, named `{uuid}_{sanitized name}`
    /// - `Err(AppError::NotFound)` - Unknown or foreign communication
    /// - `Err(AppError::BadRequest)` - Extension not allowed
    pub async fn upload(
        &self,
        user_id: i32,
        communication_id: i32,
        file: UploadedFile,
        allowed_extensions: &HashSet<String>,
    ) -> Result<Attachment, AppError> {
        let communication = CommunicationRepository::new(self.db)
            .get_by_id_for_user(communication_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid communication ID".to_string()))?;

        if !allowed_file(&file.filename, allowed_extensions) {
            return Err(AppError::BadRequest("Invalid file type".to_string()));
        }

        let stored = self.uploads.save(&file.filename, &file.data).await?;

        let result = AttachmentRepository::new(self.db)
            .create(CreateAttachmentParam {
                communication_id: communication.id,
                filename: stored.filename,
                filetype: file.content_type,
                filepath: stored.filepath.clone(),
            })
            .await;

        match result {
            Ok(attachment) => Ok(attachment),
            Err(e) => {
                self.uploads.remove_all(&[stored.filepath]).await;
                Err(e.into())
            }
        }
    }

    /// Loads an owned attachment together with its stored bytes.
    pub async fn download(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<(Attachment, Vec<u8>), AppError> {
        let attachment = AttachmentRepository::new(self.db)
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attachment not found".to_string()))?;

        let data = self.uploads.read(&attachment.filepath).await?;

        Ok((attachment, data))
    }
}
