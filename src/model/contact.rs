use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub department: Option<String>,
}

/// Writable fields of a contact. `name` is required on create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactInputDto {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub department: Option<String>,
}
