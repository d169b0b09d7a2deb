use crate::server::data::user::UserRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_token;
mod get_all_paginated;
mod update;
