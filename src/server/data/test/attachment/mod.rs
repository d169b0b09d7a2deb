use crate::server::{
    data::attachment::AttachmentRepository, model::attachment::CreateAttachmentParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id_for_user;
