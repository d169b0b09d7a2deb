//! Contact repository, scoped to the owning user.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::contact::{Contact, ContactParam};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, param: ContactParam) -> Result<Contact, DbErr> {
        let entity = entity::contact::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(param.name),
            phone_number: ActiveValue::Set(param.phone_number),
            email: ActiveValue::Set(param.email),
            organization: ActiveValue::Set(param.organization),
            department: ActiveValue::Set(param.department),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Contact::from_entity(entity))
    }

    /// Gets a contact by id if it belongs to `user_id`.
    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Contact>, DbErr> {
        let entity = entity::prelude::Contact::find_by_id(id)
            .filter(entity::contact::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Contact::from_entity))
    }

    /// Gets a page of the user's contacts ordered by name.
    ///
    /// # Returns
    /// - `Ok((contacts, total_items))` - Contacts on the zero-indexed `page` and the user's total count
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Contact>, u64), DbErr> {
        let paginator = entity::prelude::Contact::find()
            .filter(entity::contact::Column::UserId.eq(user_id))
            .order_by_asc(entity::contact::Column::Name)
            .order_by_asc(entity::contact::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let contacts = if super::page_in_range(page, per_page, total) {
            paginator.fetch_page(page).await?
        } else {
            Vec::new()
        };

        Ok((contacts.into_iter().map(Contact::from_entity).collect(), total))
    }

    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Contact>, DbErr> {
        let contacts = entity::prelude::Contact::find()
            .filter(entity::contact::Column::UserId.eq(user_id))
            .order_by_asc(entity::contact::Column::Name)
            .all(self.db)
            .await?;

        Ok(contacts.into_iter().map(Contact::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: ContactParam) -> Result<Contact, DbErr> {
        let entity = entity::contact::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            phone_number: ActiveValue::Set(param.phone_number),
            email: ActiveValue::Set(param.email),
            organization: ActiveValue::Set(param.organization),
            department: ActiveValue::Set(param.department),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Contact::from_entity(entity))
    }

    /// Deletes a contact together with its communications and their attachments.
    ///
    /// Runs in one transaction so a failure leaves every row in place.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Stored paths of the deleted attachments, for file cleanup
    /// - `Err(DbErr)` - Database error, nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<Vec<String>, DbErr> {
        let txn = self.db.begin().await?;

        let communication_ids: Vec<i32> = entity::prelude::Communication::find()
            .select_only()
            .column(entity::communication::Column::Id)
            .filter(entity::communication::Column::ContactId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        let filepaths: Vec<String> = entity::prelude::Attachment::find()
            .select_only()
            .column(entity::attachment::Column::Filepath)
            .filter(entity::attachment::Column::CommunicationId.is_in(communication_ids.clone()))
            .into_tuple()
            .all(&txn)
            .await?;

        entity::prelude::Attachment::delete_many()
            .filter(entity::attachment::Column::CommunicationId.is_in(communication_ids))
            .exec(&txn)
            .await?;
        entity::prelude::Communication::delete_many()
            .filter(entity::communication::Column::ContactId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Contact::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(filepaths)
    }
}
