pub use super::attachment::Entity as Attachment;
pub use super::calendar_event::Entity as CalendarEvent;
pub use super::communication::Entity as Communication;
pub use super::contact::Entity as Contact;
pub use super::resource::Entity as Resource;
pub use super::user::Entity as User;
