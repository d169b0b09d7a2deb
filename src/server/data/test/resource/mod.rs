use crate::server::{
    data::resource::ResourceRepository,
    model::resource::{ResourceParam, ResourceType},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id_for_user;
mod get_by_user_paginated;
