//! Contact domain model and parameters.

use serde_json::Value;

use crate::{
    model::contact::ContactDto,
    server::{error::AppError, model::patch::Patchable},
};

/// A person or organization in a user's address book.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i32,
    /// Owner of the contact.
    pub user_id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub department: Option<String>,
}

impl Contact {
    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
            organization: self.organization,
            department: self.department,
        }
    }

    pub fn from_entity(entity: entity::contact::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            phone_number: entity.phone_number,
            email: entity.email,
            organization: entity.organization,
            department: entity.department,
        }
    }

    pub fn to_param(&self) -> ContactParam {
        ContactParam {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            organization: self.organization.clone(),
            department: self.department.clone(),
        }
    }
}

/// Mutable fields of a contact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactParam {
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub department: Option<String>,
}

impl ContactParam {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Patchable for ContactParam {
    const ALLOWED_FIELDS: &'static [&'static str] =
        &["name", "phone_number", "email", "organization", "department"];

    fn set_field(&mut self, field: &str, value: Value) -> Result<(), serde_json::Error> {
        match field {
            "name" => self.name = serde_json::from_value(value)?,
            "phone_number" => self.phone_number = serde_json::from_value(value)?,
            "email" => self.email = serde_json::from_value(value)?,
            "organization" => self.organization = serde_json::from_value(value)?,
            "department" => self.department = serde_json::from_value(value)?,
            _ => {}
        }
        Ok(())
    }
}
