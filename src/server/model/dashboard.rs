use crate::{
    model::dashboard::DashboardDto,
    server::model::{
        calendar_event::CalendarEvent, communication::Communication, contact::Contact,
        resource::Resource,
    },
};

pub const DEFAULT_SECTION: &str = "welcome";

/// Aggregated view of a user's records for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub section: String,
    pub welcome: Option<String>,
    pub calendar_events: Vec<CalendarEvent>,
    pub photo_gallery: Vec<Resource>,
    pub documents: Vec<Resource>,
    pub contacts: Vec<Contact>,
    pub communications: Vec<Communication>,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            section: self.section,
            welcome: self.welcome,
            calendar_events: self
                .calendar_events
                .into_iter()
                .map(CalendarEvent::into_dto)
                .collect(),
            photo_gallery: self.photo_gallery.into_iter().map(Resource::into_dto).collect(),
            documents: self.documents.into_iter().map(Resource::into_dto).collect(),
            contacts: self.contacts.into_iter().map(Contact::into_dto).collect(),
            communications: self
                .communications
                .into_iter()
                .map(Communication::into_dto)
                .collect(),
        }
    }
}

/// Greeting shown on the first dashboard visit of a session.
pub fn welcome_message(username: &str) -> String {
    format!("Welcome to your dashboard, {}!", username)
}
