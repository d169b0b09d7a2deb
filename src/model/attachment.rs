use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Attachment metadata. The on-disk location is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentDto {
    pub id: i32,
    pub communication_id: i32,
    pub filename: String,
    pub filetype: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadedAttachmentDto {
    pub message: String,
    pub attachment: AttachmentDto,
}

/// Multipart form of an attachment upload.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadAttachmentForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub communication_id: i32,
}
