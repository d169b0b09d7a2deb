use crate::server::data::communication::CommunicationRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id_for_user;
mod get_by_user_paginated;
