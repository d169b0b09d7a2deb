//! Server-side domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types with `from_entity`
//! and controllers turn them into DTOs with `into_dto`.
//! Parameter types implement [`patch::Patchable`] and hold exactly the fields a
//! request may change.

pub mod attachment;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod dashboard;
pub mod pagination;
pub mod patch;
pub mod resource;
pub mod user;
