use std::{collections::HashSet, path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_FOLDER: &str = "uploads";
const DEFAULT_IMAGE_FOLDER: &str = "images";
const DEFAULT_ALLOWED_EXTENSIONS: &str = "png,jpg,jpeg,gif,pdf,docx,txt";
const DEFAULT_MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;
const DEFAULT_MAIL_SENDER: &str = "no-reply@localhost";
const DEFAULT_MAIL_QUEUE_SIZE: usize = 64;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Signs password reset tokens.
    pub secret_key: String,

    pub app_addr: String,

    pub upload_folder: PathBuf,
    pub image_folder: PathBuf,
    /// Lowercase file extensions accepted for attachment uploads, without the dot.
    pub allowed_extensions: HashSet<String>,
    /// Upper bound on request body size in bytes.
    pub max_content_length: usize,

    pub mail_sender: String,
    pub mail_queue_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            app_addr: optional("APP_ADDR", DEFAULT_APP_ADDR),
            upload_folder: PathBuf::from(optional("UPLOAD_FOLDER", DEFAULT_UPLOAD_FOLDER)),
            image_folder: PathBuf::from(optional("IMAGE_FOLDER", DEFAULT_IMAGE_FOLDER)),
            allowed_extensions: parse_extensions(&optional(
                "ALLOWED_EXTENSIONS",
                DEFAULT_ALLOWED_EXTENSIONS,
            )),
            max_content_length: parsed("MAX_CONTENT_LENGTH", DEFAULT_MAX_CONTENT_LENGTH)?,
            mail_sender: optional("MAIL_SENDER", DEFAULT_MAIL_SENDER),
            mail_queue_size: parsed("MAIL_QUEUE_SIZE", DEFAULT_MAIL_QUEUE_SIZE)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Default configuration with storage rooted at `root`.
    pub fn for_tests(root: &std::path::Path) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            secret_key: "test-secret".to_string(),
            app_addr: DEFAULT_APP_ADDR.to_string(),
            upload_folder: root.join(DEFAULT_UPLOAD_FOLDER),
            image_folder: root.join(DEFAULT_IMAGE_FOLDER),
            allowed_extensions: parse_extensions(DEFAULT_ALLOWED_EXTENSIONS),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            mail_sender: DEFAULT_MAIL_SENDER.to_string(),
            mail_queue_size: DEFAULT_MAIL_QUEUE_SIZE,
        }
    }
}

/// Splits a comma separated extension list, normalizing case and stripping dots.
pub fn parse_extensions(list: &str) -> HashSet<String> {
    list.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
