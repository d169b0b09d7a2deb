use serde_json::json;

use crate::server::{
    error::AppError,
    service::{contact::ContactService, test::body},
    storage::UploadStore,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
