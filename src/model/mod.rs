//! Data transfer objects shared by the HTTP surface.
//!
//! These types define the JSON bodies accepted and returned by the API. They carry
//! no behavior; server-side domain models convert into them with `into_dto()`.

pub mod api;
pub mod attachment;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod dashboard;
pub mod pagination;
pub mod resource;
pub mod user;
