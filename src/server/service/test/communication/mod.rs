use serde_json::json;

use crate::server::{
    error::AppError,
    model::pagination::PageRequest,
    service::{communication::CommunicationService, test::body},
    storage::UploadStore,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
