//! Allow-list driven partial updates from JSON objects.
//!
//! Handlers receive request bodies as raw JSON objects. A type implementing
//! [`Patchable`] copies only the keys that are both on its allow-list and in the
//! caller's include list; every other key is ignored, so ids and ownership can
//! never be changed through a request body.

use serde_json::{Map, Value};

use crate::server::error::AppError;

pub trait Patchable {
    /// Every field name this type will ever accept from a request body.
    const ALLOWED_FIELDS: &'static [&'static str];

    /// Writes one allow-listed field from its JSON value.
    ///
    /// Only called with names from `ALLOWED_FIELDS`.
    fn set_field(&mut self, field: &str, value: Value) -> Result<(), serde_json::Error>;

    /// Applies the present keys of `data` that are in both `ALLOWED_FIELDS` and
    /// `include_fields`.
    ///
    /// # Arguments
    /// - `data` - Request body object
    /// - `include_fields` - Fields the calling operation may change
    ///
    /// # Returns
    /// - `Ok(())` - All applicable fields written
    /// - `Err(AppError::BadRequest)` - A present field had a value of the wrong type
    fn apply_patch(
        &mut self,
        data: &Map<String, Value>,
        include_fields: &[&str],
    ) -> Result<(), AppError> {
        let fields = Self::ALLOWED_FIELDS
            .iter()
            .filter(|field| include_fields.contains(field));

        for field in fields {
            if let Some(value) = data.get(*field) {
                self.set_field(field, value.clone()).map_err(|e| {
                    AppError::BadRequest(format!("Invalid value for field '{}': {}", field, e))
                })?;
            }
        }

        Ok(())
    }
}

/// Fails with 400 "Missing required fields" unless every name is a key of `data`.
pub fn require_fields(data: &Map<String, Value>, required: &[&str]) -> Result<(), AppError> {
    if required.iter().all(|field| data.contains_key(*field)) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Missing required fields".to_string()))
    }
}
