use crate::server::{
    config::Config,
    error::AppError,
    model::attachment::UploadedFile,
    service::attachment::AttachmentService,
    storage::UploadStore,
};
use test_utils::{builder::TestBuilder, factory};

mod download;
mod upload;

fn file(name: &str, content_type: &str) -> UploadedFile {
    UploadedFile {
        filename: name.to_string(),
        content_type: content_type.to_string(),
        data: b"contents".to_vec(),
    }
}
