//! Multipart form decoding for the upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{error::AppError, model::attachment::UploadedFile};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Text fields and file parts of a multipart body, keyed by part name.
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl FormData {
    /// Reads every part of the body.
    ///
    /// A part with a filename is a file; a file part with an empty filename and
    /// no data is what browsers send when nothing was chosen and is skipped.
    ///
    /// # Returns
    /// - `Ok(FormData)` - All parts read
    /// - `Err(AppError::MultipartErr(_))` - Malformed body or a body over the size limit
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_CONTENT_TYPE)
                        .to_string();
                    let data = field.bytes().await?.to_vec();

                    if filename.is_empty() && data.is_empty() {
                        continue;
                    }

                    form.files.insert(
                        name,
                        UploadedFile {
                            filename,
                            content_type,
                            data,
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Removes and returns a text field, treating blank values as absent.
    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields
            .remove(name)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}
