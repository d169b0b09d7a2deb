use serde_json::json;

use crate::server::{
    error::AppError,
    model::pagination::PageRequest,
    service::{calendar_event::CalendarEventService, test::body},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod isolation;
mod update;
