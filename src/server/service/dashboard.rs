use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        calendar_event::CalendarEventRepository, communication::CommunicationRepository,
        contact::ContactRepository, resource::ResourceRepository,
    },
    error::AppError,
    model::{
        dashboard::{welcome_message, Dashboard, DEFAULT_SECTION},
        resource::ResourceType,
        user::User,
    },
    service::communication::RECENT_LIMIT,
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects everything the dashboard shows for `user`.
    ///
    /// # Arguments
    /// - `user` - Principal whose records are collected
    /// - `section` - Requested section, `welcome` when `None`
    /// - `first_visit` - Whether to include the one-time welcome message
    pub async fn get(
        &self,
        user: &User,
        section: Option<String>,
        first_visit: bool,
    ) -> Result<Dashboard, AppError> {
        let calendar_events = CalendarEventRepository::new(self.db)
            .get_all_by_user(user.id)
            .await?;

        let resources = ResourceRepository::new(self.db);
        let photo_gallery = resources
            .get_all_by_user_and_type(user.id, ResourceType::Photo)
            .await?;
        let documents = resources
            .get_all_by_user_and_type(user.id, ResourceType::Document)
            .await?;

        let contacts = ContactRepository::new(self.db)
            .get_all_by_user(user.id)
            .await?;
        let communications = CommunicationRepository::new(self.db)
            .get_recent_by_user(user.id, RECENT_LIMIT)
            .await?;

        Ok(Dashboard {
            section: section
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SECTION.to_string()),
            welcome: first_visit.then(|| welcome_message(&user.username)),
            calendar_events,
            photo_gallery,
            documents,
            contacts,
            communications,
        })
    }
}
