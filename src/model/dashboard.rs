use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    calendar_event::CalendarEventDto, communication::CommunicationDto, contact::ContactDto,
    resource::ResourceDto,
};

/// Everything the dashboard page shows for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    /// Section requested by the client, `welcome` when absent.
    pub section: String,
    /// Greeting shown on the first visit of a session only.
    pub welcome: Option<String>,
    pub calendar_events: Vec<CalendarEventDto>,
    pub photo_gallery: Vec<ResourceDto>,
    pub documents: Vec<ResourceDto>,
    pub contacts: Vec<ContactDto>,
    /// Newest first.
    pub communications: Vec<CommunicationDto>,
}
