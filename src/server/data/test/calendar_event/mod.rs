use crate::server::{
    data::calendar_event::CalendarEventRepository, model::calendar_event::CalendarEventParam,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user_paginated;
mod update;
