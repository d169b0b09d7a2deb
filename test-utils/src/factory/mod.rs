//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Owner ids are
//! always passed explicitly so tests decide which user a record belongs to.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let contact = factory::contact::create_contact(&db, user.id).await?;
//!
//! let (user, contact, communication) =
//!     factory::helpers::create_communication_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::calendar_event::CalendarEventFactory::new(&db, user.id)
//!     .title("Standup")
//!     .recurring("daily")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with a password hash and optional bearer token
//! - `calendar_event` - Calendar events owned by a user
//! - `contact` - Contacts owned by a user
//! - `communication` - Communications with a contact
//! - `attachment` - Attachments on a communication
//! - `resource` - Photo and document resources owned by a user
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod attachment;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod helpers;
pub mod resource;
pub mod user;

pub use attachment::create_attachment;
pub use calendar_event::create_event;
pub use communication::create_communication;
pub use contact::create_contact;
pub use resource::create_resource;
pub use user::create_user;
