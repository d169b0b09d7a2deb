//! HTTP request handlers.
//!
//! Every handler authenticates through `AuthGuard`, calls one service and
//! converts the returned domain model to its DTO. Errors propagate as `AppError`.

pub mod auth;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod dashboard;
pub mod form;
pub mod param;
pub mod resource;
pub mod user;
