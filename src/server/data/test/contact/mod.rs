use crate::server::data::contact::ContactRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id_for_user;
mod get_by_user_paginated;
