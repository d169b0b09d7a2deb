//! Attachment repository.
//!
//! Ownership runs attachment → communication → contact → user, so scoped reads
//! join through both parents.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};

use crate::server::model::attachment::{Attachment, CreateAttachmentParam};

pub struct AttachmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttachmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAttachmentParam) -> Result<Attachment, DbErr> {
        let entity = entity::attachment::ActiveModel {
            communication_id: ActiveValue::Set(param.communication_id),
            filename: ActiveValue::Set(param.filename),
            filetype: ActiveValue::Set(param.filetype),
            filepath: ActiveValue::Set(param.filepath),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attachment::from_entity(entity))
    }

    /// Gets an attachment by id if its communication's contact belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Attachment))` - Attachment exists and is owned by the user
    /// - `Ok(None)` - No such attachment, or it belongs to someone else
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Attachment>, DbErr> {
        let entity = entity::prelude::Attachment::find_by_id(id)
            .join(
                JoinType::InnerJoin,
                entity::attachment::Relation::Communication.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::communication::Relation::Contact.def(),
            )
            .filter(entity::contact::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Attachment::from_entity))
    }
}
