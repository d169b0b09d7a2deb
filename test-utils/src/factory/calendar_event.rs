//! Calendar event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test calendar events owned by a user.
///
/// # Example
///
/// ```rust,ignore
/// let event = CalendarEventFactory::new(&db, user.id)
///     .title("Standup")
///     .starts_at(start)
///     .build()
///     .await?;
/// ```
pub struct CalendarEventFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    is_recurring: bool,
    recurrence_pattern: Option<String>,
}

impl<'a> CalendarEventFactory<'a> {
    /// Creates a new CalendarEventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - start_time: one hour from now, end_time: thirty minutes after start
    /// - not recurring
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the event
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        let start_time = Utc::now() + Duration::hours(1);
        Self {
            db,
            user_id,
            title: format!("Event {}", id),
            description: None,
            start_time,
            end_time: start_time + Duration::minutes(30),
            is_recurring: false,
            recurrence_pattern: None,
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

    /// Moves the event to start at `start_time`, keeping its duration.
    pub fn starts_at(mut self, start_time: DateTime<Utc>) -> Self {
        let duration = self.end_time - self.start_time;
        self.start_time = start_time;
        self.end_time = start_time + duration;
        self
    }

    /// Marks the event as recurring with the given pattern, e.g. `"weekly"`.
    pub fn recurring(mut self, pattern: impl Into<String>) -> Self {
        self.is_recurring = true;
        self.recurrence_pattern = Some(pattern.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::calendar_event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::calendar_event::Model, DbErr> {
        let now = Utc::now();
        entity::calendar_event::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            is_recurring: ActiveValue::Set(self.is_recurring),
            recurrence_pattern: ActiveValue::Set(self.recurrence_pattern),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given user.
pub async fn create_event(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::calendar_event::Model, DbErr> {
    CalendarEventFactory::new(db, user_id).build().await
}
