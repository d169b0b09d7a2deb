//! Communication repository.
//!
//! Communications have no direct owner column; every query joins their contact
//! and filters on the contact's `user_id`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    attachment::Attachment,
    communication::{Communication, CommunicationParam, CommunicationWithAttachments},
};

pub struct CommunicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a communication with a contact, timestamped now.
    ///
    /// The caller must have confirmed the contact belongs to the user.
    pub async fn create(
        &self,
        contact: &entity::contact::Model,
        param: CommunicationParam,
    ) -> Result<Communication, DbErr> {
        let entity = entity::communication::ActiveModel {
            contact_id: ActiveValue::Set(contact.id),
            message_type: ActiveValue::Set(param.message_type),
            content: ActiveValue::Set(param.content),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Communication::from_entity(entity, contact))
    }

    /// Loads the contact row for `contact_id` if it belongs to `user_id`.
    pub async fn find_contact_for_user(
        &self,
        contact_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::contact::Model>, DbErr> {
        entity::prelude::Contact::find_by_id(contact_id)
            .filter(entity::contact::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a communication by id if its contact belongs to `user_id`.
    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Communication>, DbErr> {
        let result = entity::prelude::Communication::find_by_id(id)
            .find_also_related(entity::prelude::Contact)
            .filter(entity::contact::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(result.and_then(|(communication, contact)| {
            contact.map(|contact| Communication::from_entity(communication, &contact))
        }))
    }

    /// Gets a communication with all of its attachments, scoped to `user_id`.
    pub async fn get_with_attachments_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<CommunicationWithAttachments>, DbErr> {
        let Some(communication) = self.get_by_id_for_user(id, user_id).await? else {
            return Ok(None);
        };

        let attachments = entity::prelude::Attachment::find()
            .filter(entity::attachment::Column::CommunicationId.eq(id))
            .order_by_asc(entity::attachment::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(CommunicationWithAttachments {
            communication,
            attachments: attachments
                .into_iter()
                .map(Attachment::from_entity)
                .collect(),
        }))
    }

    /// Gets a page of the user's communications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the contacts the communications belong to
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of communications per page
    ///
    /// # Returns
    /// - `Ok((communications, total_items))` - Communications on the page and the user's total count
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Communication>, u64), DbErr> {
        let paginator = entity::prelude::Communication::find()
            .find_also_related(entity::prelude::Contact)
            .filter(entity::contact::Column::UserId.eq(user_id))
            .order_by_desc(entity::communication::Column::Timestamp)
            .order_by_desc(entity::communication::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = if super::page_in_range(page, per_page, total) {
            paginator.fetch_page(page).await?
        } else {
            Vec::new()
        };

        Ok((collect_with_contacts(rows), total))
    }

    /// Gets the user's most recent communications, newest first.
    pub async fn get_recent_by_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<Communication>, DbErr> {
        let rows = entity::prelude::Communication::find()
            .find_also_related(entity::prelude::Contact)
            .filter(entity::contact::Column::UserId.eq(user_id))
            .order_by_desc(entity::communication::Column::Timestamp)
            .order_by_desc(entity::communication::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(collect_with_contacts(rows))
    }

    /// Deletes a communication and its attachments in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Stored paths of the deleted attachments, for file cleanup
    /// - `Err(DbErr)` - Database error, nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<Vec<String>, DbErr> {
        let txn = self.db.begin().await?;

        let filepaths: Vec<String> = entity::prelude::Attachment::find()
            .select_only()
            .column(entity::attachment::Column::Filepath)
            .filter(entity::attachment::Column::CommunicationId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        entity::prelude::Attachment::delete_many()
            .filter(entity::attachment::Column::CommunicationId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Communication::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(filepaths)
    }
}

fn collect_with_contacts(
    rows: Vec<(entity::communication::Model, Option<entity::contact::Model>)>,
) -> Vec<Communication> {
    rows.into_iter()
        .filter_map(|(communication, contact)| {
            contact.map(|contact| Communication::from_entity(communication, &contact))
        })
        .collect()
}
