use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attachment::AttachmentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommunicationDto {
    pub id: i32,
    pub contact_id: i32,
    pub contact_name: String,
    pub message_type: String,
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A communication together with its attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommunicationDetailDto {
    #[serde(flatten)]
    pub communication: CommunicationDto,
    pub attachments: Vec<AttachmentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommunicationDto {
    /// Must be one of the caller's contacts.
    pub contact_id: i32,
    pub message_type: String,
    pub content: Option<String>,
}
