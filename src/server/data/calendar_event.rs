//! Calendar event repository.
//!
//! Every read is scoped to the owning user. Update and delete take a bare id and
//! must only be called after a scoped read confirmed ownership.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::calendar_event::{CalendarEvent, CalendarEventParam};

pub struct CalendarEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event owned by `user_id`, stamping created and updated times.
    pub async fn create(
        &self,
        user_id: i32,
        param: CalendarEventParam,
    ) -> Result<CalendarEvent, DbErr> {
        let now = Utc::now();
        let entity = entity::calendar_event::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            is_recurring: ActiveValue::Set(param.is_recurring),
            recurrence_pattern: ActiveValue::Set(param.recurrence_pattern),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CalendarEvent::from_entity(entity))
    }

    /// Gets an event by id if it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(CalendarEvent))` - Event exists and is owned by the user
    /// - `Ok(None)` - No such event, or it belongs to someone else
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<CalendarEvent>, DbErr> {
        let entity = entity::prelude::CalendarEvent::find_by_id(id)
            .filter(entity::calendar_event::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CalendarEvent::from_entity))
    }

    /// Gets a page of the user's events ordered by start time.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the events
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of events per page
    ///
    /// # Returns
    /// - `Ok((events, total_items))` - Events on the page and the user's total count
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CalendarEvent>, u64), DbErr> {
        let paginator = entity::prelude::CalendarEvent::find()
            .filter(entity::calendar_event::Column::UserId.eq(user_id))
            .order_by_asc(entity::calendar_event::Column::StartTime)
            .order_by_asc(entity::calendar_event::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = if super::page_in_range(page, per_page, total) {
            paginator.fetch_page(page).await?
        } else {
            Vec::new()
        };

        Ok((
            events.into_iter().map(CalendarEvent::from_entity).collect(),
            total,
        ))
    }

    /// Gets all of the user's events ordered by start time.
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<CalendarEvent>, DbErr> {
        let events = entity::prelude::CalendarEvent::find()
            .filter(entity::calendar_event::Column::UserId.eq(user_id))
            .order_by_asc(entity::calendar_event::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(events.into_iter().map(CalendarEvent::from_entity).collect())
    }

    /// Overwrites the mutable fields of an event and bumps `updated_at`.
    pub async fn update(&self, id: i32, param: CalendarEventParam) -> Result<CalendarEvent, DbErr> {
        let entity = entity::calendar_event::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            is_recurring: ActiveValue::Set(param.is_recurring),
            recurrence_pattern: ActiveValue::Set(param.recurrence_pattern),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(CalendarEvent::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::CalendarEvent::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
