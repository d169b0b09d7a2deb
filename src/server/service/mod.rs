//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They take the principal's
//! id explicitly, turn "not owned" into `AppError::NotFound`, merge request
//! bodies through the `Patchable` allow-lists, validate, and coordinate the
//! database with the file stores and the mail queue.

pub mod attachment;
pub mod auth;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod dashboard;
pub mod resource;
pub mod user;

#[cfg(test)]
mod test;
