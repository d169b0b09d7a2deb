use serde_json::json;

use crate::server::{
    error::AppError,
    model::{
        pagination::PageRequest,
        resource::{ResourceParam, ResourceType},
    },
    service::{resource::ResourceService, test::body},
    storage::ImageStore,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn photo(title: &str) -> ResourceParam {
    ResourceParam {
        title: title.to_string(),
        description: None,
        resource_type: ResourceType::Photo,
    }
}
