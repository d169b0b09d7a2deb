//! Resource domain model and parameters.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    model::resource::{ResourceDetailDto, ResourceDto},
    server::{error::AppError, model::patch::Patchable},
};

const MAX_TITLE_LENGTH: usize = 128;

/// Kind of a stored resource, shown in separate dashboard sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Photo,
    #[default]
    Document,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Document => "document",
        }
    }

    /// Parses the stored column value; unknown values read as documents.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "photo" => Self::Photo,
            _ => Self::Document,
        }
    }
}

/// A photo or document owned by a user, optionally backed by an image blob.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub resource_type: ResourceType,
    /// Id of the image in the image store.
    pub image_id: Option<String>,
}

impl Resource {
    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            resource_type: self.resource_type.as_str().to_string(),
            image_id: self.image_id,
        }
    }

    pub fn from_entity(entity: entity::resource::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            resource_type: ResourceType::from_stored(&entity.resource_type),
            image_id: entity.image_id,
        }
    }

    pub fn to_param(&self) -> ResourceParam {
        ResourceParam {
            title: self.title.clone(),
            description: self.description.clone(),
            resource_type: self.resource_type,
        }
    }
}

/// A resource with its image bytes loaded from the image store.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceWithImage {
    pub resource: Resource,
    pub image: Option<Vec<u8>>,
}

impl ResourceWithImage {
    /// Converts to a DTO with the image base64 encoded.
    pub fn into_dto(self) -> ResourceDetailDto {
        ResourceDetailDto {
            resource: self.resource.into_dto(),
            image: self.image.map(|bytes| STANDARD.encode(bytes)),
        }
    }
}

/// Mutable fields of a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceParam {
    pub title: String,
    pub description: Option<String>,
    pub resource_type: ResourceType,
}

impl ResourceParam {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        Ok(())
    }
}

impl Patchable for ResourceParam {
    const ALLOWED_FIELDS: &'static [&'static str] = &["title", "description", "resource_type"];

    fn set_field(&mut self, field: &str, value: Value) -> Result<(), serde_json::Error> {
        match field {
            "title" => self.title = serde_json::from_value(value)?,
            "description" => self.description = serde_json::from_value(value)?,
            "resource_type" => self.resource_type = serde_json::from_value(value)?,
            _ => {}
        }
        Ok(())
    }
}
