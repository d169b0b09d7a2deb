//! Application state shared across all request handlers.
//!
//! Built once in `main` and cloned into every handler through Axum's `State`
//! extractor. Every field is cheap to clone: the database connection is a pool,
//! the config is behind an `Arc`, the mail service wraps a channel sender and the
//! stores only hold their root directory.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    mail::MailService,
    storage::{ImageStore, UploadStore},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,

    /// Queue for outbound email, drained by the mail worker.
    pub mail: MailService,

    /// Attachment files.
    pub uploads: UploadStore,
    /// Resource images.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        mail: MailService,
        uploads: UploadStore,
        images: ImageStore,
    ) -> Self {
        Self {
            db,
            config: Arc::new(config),
            mail,
            uploads,
            images,
        }
    }
}
