//! Resource repository, scoped to the owning user.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::resource::{Resource, ResourceParam, ResourceType};

pub struct ResourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a resource owned by `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the resource
    /// - `param` - Title, description and type
    /// - `image_id` - Id of an image already written to the image store
    pub async fn create(
        &self,
        user_id: i32,
        param: ResourceParam,
        image_id: Option<String>,
    ) -> Result<Resource, DbErr> {
        let entity = entity::resource::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            resource_type: ActiveValue::Set(param.resource_type.as_str().to_string()),
            image_id: ActiveValue::Set(image_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Resource::from_entity(entity))
    }

    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Resource>, DbErr> {
        let entity = entity::prelude::Resource::find_by_id(id)
            .filter(entity::resource::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Resource::from_entity))
    }

    /// Gets a page of the user's resources, optionally of one type, ordered by id.
    ///
    /// # Returns
    /// - `Ok((resources, total_items))` - Resources on the zero-indexed `page` and the matching total
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        resource_type: Option<ResourceType>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Resource>, u64), DbErr> {
        let mut query = entity::prelude::Resource::find()
            .filter(entity::resource::Column::UserId.eq(user_id));
        if let Some(resource_type) = resource_type {
            query = query.filter(entity::resource::Column::ResourceType.eq(resource_type.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::resource::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let resources = if super::page_in_range(page, per_page, total) {
            paginator.fetch_page(page).await?
        } else {
            Vec::new()
        };

        Ok((
            resources.into_iter().map(Resource::from_entity).collect(),
            total,
        ))
    }

    /// Gets all of the user's resources of one type.
    pub async fn get_all_by_user_and_type(
        &self,
        user_id: i32,
        resource_type: ResourceType,
    ) -> Result<Vec<Resource>, DbErr> {
        let resources = entity::prelude::Resource::find()
            .filter(entity::resource::Column::UserId.eq(user_id))
            .filter(entity::resource::Column::ResourceType.eq(resource_type.as_str()))
            .order_by_asc(entity::resource::Column::Id)
            .all(self.db)
            .await?;

        Ok(resources.into_iter().map(Resource::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: ResourceParam) -> Result<Resource, DbErr> {
        let entity = entity::resource::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            resource_type: ActiveValue::Set(param.resource_type.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Resource::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Resource::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
