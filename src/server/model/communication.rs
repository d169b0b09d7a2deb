//! Communication domain model and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::communication::{CommunicationDetailDto, CommunicationDto},
    server::{
        error::AppError,
        model::{attachment::Attachment, patch::Patchable},
    },
};

/// A logged message exchanged with one of the user's contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Communication {
    pub id: i32,
    pub contact_id: i32,
    /// Name of the contact, resolved when the communication is loaded.
    pub contact_name: String,
    pub message_type: String,
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Communication {
    pub fn into_dto(self) -> CommunicationDto {
        CommunicationDto {
            id: self.id,
            contact_id: self.contact_id,
            contact_name: self.contact_name,
            message_type: self.message_type,
            content: self.content,
            timestamp: self.timestamp,
        }
    }

    pub fn from_entity(
        entity: entity::communication::Model,
        contact: &entity::contact::Model,
    ) -> Self {
        Self {
            id: entity.id,
            contact_id: entity.contact_id,
            contact_name: contact.name.clone(),
            message_type: entity.message_type,
            content: entity.content,
            timestamp: entity.timestamp,
        }
    }
}

/// A communication together with its attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunicationWithAttachments {
    pub communication: Communication,
    pub attachments: Vec<Attachment>,
}

impl CommunicationWithAttachments {
    pub fn into_dto(self) -> CommunicationDetailDto {
        CommunicationDetailDto {
            communication: self.communication.into_dto(),
            attachments: self
                .attachments
                .into_iter()
                .map(Attachment::into_dto)
                .collect(),
        }
    }
}

/// Mutable fields of a communication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunicationParam {
    pub message_type: String,
    pub content: Option<String>,
}

impl CommunicationParam {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.message_type.trim().is_empty() {
            return Err(AppError::BadRequest(
                "message_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Patchable for CommunicationParam {
    const ALLOWED_FIELDS: &'static [&'static str] = &["message_type", "content"];

    fn set_field(&mut self, field: &str, value: Value) -> Result<(), serde_json::Error> {
        match field {
            "message_type" => self.message_type = serde_json::from_value(value)?,
            "content" => self.content = serde_json::from_value(value)?,
            _ => {}
        }
        Ok(())
    }
}
