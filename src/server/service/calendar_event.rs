use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::calendar_event::CalendarEventRepository,
    error::AppError,
    model::{
        calendar_event::{CalendarEvent, CalendarEventParam},
        pagination::{Page, PageRequest},
        patch::{require_fields, Patchable},
    },
};

const REQUIRED_FIELDS: &[&str] = &["title", "start_time", "end_time"];

pub struct CalendarEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the user's events ordered by start time.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        request: PageRequest,
    ) -> Result<Page<CalendarEvent>, AppError> {
        let (events, total) = CalendarEventRepository::new(self.db)
            .get_by_user_paginated(user_id, request.index(), request.per_page)
            .await?;

        Ok(Page::new(events, request, total))
    }

    pub async fn get(&self, id: i32, user_id: i32) -> Result<CalendarEvent, AppError> {
        CalendarEventRepository::new(self.db)
            .get_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates an event from a request body.
    ///
    /// # Returns
    /// - `Ok(CalendarEvent)` - Created event
    /// - `Err(AppError::BadRequest)` - Missing title, start or end, a mistyped
    ///   field, or an event ending before it starts
    pub async fn create(
        &self,
        user_id: i32,
        data: &Map<String, Value>,
    ) -> Result<CalendarEvent, AppError> {
        require_fields(data, REQUIRED_FIELDS)?;

        let mut param = CalendarEventParam::default();
        param.apply_patch(data, CalendarEventParam::ALLOWED_FIELDS)?;
        param.validate()?;

        Ok(CalendarEventRepository::new(self.db)
            .create(user_id, param)
            .await?)
    }

    /// Merges the allow-listed fields of `data` into an owned event.
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        data: &Map<String, Value>,
    ) -> Result<CalendarEvent, AppError> {
        let event = self.get(id, user_id).await?;

        let mut param = event.to_param();
        param.apply_patch(data, CalendarEventParam::ALLOWED_FIELDS)?;
        param.validate()?;

        Ok(CalendarEventRepository::new(self.db)
            .update(event.id, param)
            .await?)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let event = self.get(id, user_id).await?;

        CalendarEventRepository::new(self.db)
            .delete(event.id)
            .await?;

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}
