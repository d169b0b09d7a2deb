//! SeaORM entity models for the dashboard database.

pub mod prelude;

pub mod attachment;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod resource;
pub mod user;
