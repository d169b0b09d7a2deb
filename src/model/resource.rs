use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResourceDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Either `photo` or `document`.
    pub resource_type: String,
    pub image_id: Option<String>,
}

/// A resource with its stored image inlined as base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResourceDetailDto {
    #[serde(flatten)]
    pub resource: ResourceDto,
    pub image: Option<String>,
}

/// Writable fields of a resource. Absent fields keep their value on update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceInputDto {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Either `photo` or `document`.
    pub resource_type: Option<String>,
}

/// Multipart form of a resource upload.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateResourceForm {
    pub title: String,
    pub description: Option<String>,
    /// Either `photo` or `document`, defaults to `document`.
    pub resource_type: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
