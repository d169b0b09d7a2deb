//! Contact factory for creating test contact entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contacts owned by a user.
pub struct ContactFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    phone_number: Option<String>,
    email: Option<String>,
    organization: Option<String>,
    department: Option<String>,
}

impl<'a> ContactFactory<'a> {
    /// Creates a new ContactFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Contact {id}"`
    /// - email: `"contact{id}@example.com"`
    /// - phone_number, organization, department: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Contact {}", id),
            phone_number: None,
            email: Some(format!("contact{}@example.com", id)),
            organization: None,
            department: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Builds and inserts the contact entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::contact::Model)` - Created contact entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            organization: ActiveValue::Set(self.organization),
            department: ActiveValue::Set(self.department),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a contact with default values for the given user.
pub async fn create_contact(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::contact::Model, DbErr> {
    ContactFactory::new(db, user_id).build().await
}
