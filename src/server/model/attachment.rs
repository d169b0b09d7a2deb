//! Attachment domain model and parameters.

use crate::model::attachment::AttachmentDto;

/// File uploaded against a communication.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub id: i32,
    pub communication_id: i32,
    /// Stored name, `{uuid}_{sanitized original name}`.
    pub filename: String,
    /// MIME type reported by the uploader.
    pub filetype: String,
    /// Location in the upload store. Never serialized.
    pub filepath: String,
}

impl Attachment {
    pub fn into_dto(self) -> AttachmentDto {
        AttachmentDto {
            id: self.id,
            communication_id: self.communication_id,
            filename: self.filename,
            filetype: self.filetype,
        }
    }

    pub fn from_entity(entity: entity::attachment::Model) -> Self {
        Self {
            id: entity.id,
            communication_id: entity.communication_id,
            filename: entity.filename,
            filetype: entity.filetype,
            filepath: entity.filepath,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAttachmentParam {
    pub communication_id: i32,
    pub filename: String,
    pub filetype: String,
    pub filepath: String,
}

/// An uploaded file as received from a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name supplied by the client, unsanitized.
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}
