use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::resource::ResourceRepository,
    error::{storage::StorageError, AppError},
    model::{
        pagination::{Page, PageRequest},
        patch::Patchable,
        resource::{Resource, ResourceParam, ResourceType, ResourceWithImage},
    },
    storage::ImageStore,
};

pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> ResourceService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    pub async fn get_paginated(
        &self,
        user_id: i32,
        resource_type: Option<ResourceType>,
        request: PageRequest,
    ) -> Result<Page<Resource>, AppError> {
        let (resources, total) = ResourceRepository::new(self.db)
            .get_by_user_paginated(user_id, resource_type, request.index(), request.per_page)
            .await?;

        Ok(Page::new(resources, request, total))
    }

    /// Gets an owned resource with its image loaded from the image store.
    ///
    /// A resource whose image has gone missing from the store is returned
    /// without an image.
    pub async fn get(&self, id: i32, user_id: i32) -> Result<ResourceWithImage, AppError> {
        let resource = self.get_owned(id, user_id).await?;

        let image = match &resource.image_id {
            Some(image_id) => match self.images.load(image_id).await {
                Ok(data) => Some(data),
                Err(StorageError::NotFound(_)) => {
                    tracing::warn!("Image {} of resource {} is missing", image_id, resource.id);
                    None
                }
                Err(e) => return Err(e.into()),
            },
            None => None,
        };

        Ok(ResourceWithImage { resource, image })
    }

    /// Creates a resource, storing `image` first when present.
    ///
    /// # Returns
    /// - `Ok(Resource)` - Created resource carrying the new image id
    /// - `Err(AppError::BadRequest)` - Invalid title
    pub async fn create(
        &self,
        user_id: i32,
        param: ResourceParam,
        image: Option<Vec<u8>>,
    ) -> Result<Resource, AppError> {
        param.validate()?;

        let image_id = match image {
            Some(data) => Some(self.images.save(&data).await?),
            None => None,
        };

        let result = ResourceRepository::new(self.db)
            .create(user_id, param, image_id.clone())
            .await;

        match (result, image_id) {
            (Ok(resource), _) => Ok(resource),
            (Err(e), Some(image_id)) => {
                if let Err(remove_err) = self.images.remove(&image_id).await {
                    tracing::warn!("Failed to remove orphaned image {}: {}", image_id, remove_err);
                }
                Err(e.into())
            }
            (Err(e), None) => Err(e.into()),
        }
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        data: &Map<String, Value>,
    ) -> Result<Resource, AppError> {
        let resource = self.get_owned(id, user_id).await?;

        let mut param = resource.to_param();
        param.apply_patch(data, ResourceParam::ALLOWED_FIELDS)?;
        param.validate()?;

        Ok(ResourceRepository::new(self.db)
            .update(resource.id, param)
            .await?)
    }

    /// Deletes an owned resource and its stored image.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let resource = self.get_owned(id, user_id).await?;

        ResourceRepository::new(self.db).delete(resource.id).await?;

        if let Some(image_id) = resource.image_id {
            if let Err(e) = self.images.remove(&image_id).await {
                tracing::warn!("Failed to remove image {}: {}", image_id, e);
            }
        }

        Ok(())
    }

    async fn get_owned(&self, id: i32, user_id: i32) -> Result<Resource, AppError> {
        ResourceRepository::new(self.db)
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
    }
}
