//! Resource factory for creating test photo and document entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test resources owned by a user.
pub struct ResourceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: Option<String>,
    resource_type: String,
    image_id: Option<String>,
}

impl<'a> ResourceFactory<'a> {
    /// Creates a new ResourceFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Resource {id}"`
    /// - resource_type: `"document"`
    /// - description, image_id: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Resource {}", id),
            description: None,
            resource_type: "document".to_string(),
            image_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the resource type, `"photo"` or `"document"`.
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    pub fn image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    /// Builds and inserts the resource entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::resource::Model)` - Created resource entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::resource::Model, DbErr> {
        entity::resource::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            resource_type: ActiveValue::Set(self.resource_type),
            image_id: ActiveValue::Set(self.image_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document resource with default values for the given user.
pub async fn create_resource(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::resource::Model, DbErr> {
    ResourceFactory::new(db, user_id).build().await
}
