//! Calendar event domain model and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::calendar_event::CalendarEventDto,
    server::{error::AppError, model::patch::Patchable},
};

const MAX_TITLE_LENGTH: usize = 128;
const MAX_RECURRENCE_PATTERN_LENGTH: usize = 64;

/// A user's calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: i32,
    /// Owner of the event.
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn into_dto(self) -> CalendarEventDto {
        CalendarEventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            is_recurring: self.is_recurring,
            recurrence_pattern: self.recurrence_pattern,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::calendar_event::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            is_recurring: entity.is_recurring,
            recurrence_pattern: entity.recurrence_pattern,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Current values of the mutable fields, used as the base for an update.
    pub fn to_param(&self) -> CalendarEventParam {
        CalendarEventParam {
            title: self.title.clone(),
            description: self.description.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            is_recurring: self.is_recurring,
            recurrence_pattern: self.recurrence_pattern.clone(),
        }
    }
}

/// Mutable fields of a calendar event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarEventParam {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
}

impl CalendarEventParam {
    /// Checks the invariants a stored event must satisfy.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty or over-long title, over-long
    ///   recurrence pattern, or `end_time` before `start_time`
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        if self
            .recurrence_pattern
            .as_ref()
            .is_some_and(|p| p.chars().count() > MAX_RECURRENCE_PATTERN_LENGTH)
        {
            return Err(AppError::BadRequest(format!(
                "Recurrence pattern must be at most {} characters",
                MAX_RECURRENCE_PATTERN_LENGTH
            )));
        }
        if self.end_time < self.start_time {
            return Err(AppError::BadRequest(
                "end_time must not be before start_time".to_string(),
            ));
        }

        Ok(())
    }
}

impl Patchable for CalendarEventParam {
    const ALLOWED_FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "start_time",
        "end_time",
        "is_recurring",
        "recurrence_pattern",
    ];

    fn set_field(&mut self, field: &str, value: Value) -> Result<(), serde_json::Error> {
        match field {
            "title" => self.title = serde_json::from_value(value)?,
            "description" => self.description = serde_json::from_value(value)?,
            "start_time" => self.start_time = serde_json::from_value(value)?,
            "end_time" => self.end_time = serde_json::from_value(value)?,
            "is_recurring" => self.is_recurring = serde_json::from_value(value)?,
            "recurrence_pattern" => self.recurrence_pattern = serde_json::from_value(value)?,
            _ => {}
        }
        Ok(())
    }
}
