//! Query string parameters shared by the collection endpoints.

use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::{pagination::PageRequest, resource::ResourceType},
};

#[derive(Debug, Default, Deserialize)]
pub struct PaginationParam {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationParam {
    /// Validates and clamps the requested page.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Page defaults to 1, size to 10 and is capped at 100
    /// - `Err(AppError::BadRequest)` - Page or size below 1
    pub fn to_request(&self) -> Result<PageRequest, AppError> {
        PageRequest::new(self.page, self.per_page)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceFilterParam {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub resource_type: Option<String>,
}

impl ResourceFilterParam {
    pub fn to_request(&self) -> Result<PageRequest, AppError> {
        PageRequest::new(self.page, self.per_page)
    }

    /// Parses the optional type filter.
    ///
    /// # Returns
    /// - `Ok(None)` - No filter given
    /// - `Ok(Some(ResourceType))` - `photo` or `document`
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn resource_type(&self) -> Result<Option<ResourceType>, AppError> {
        match self.resource_type.as_deref() {
            None => Ok(None),
            Some("photo") => Ok(Some(ResourceType::Photo)),
            Some("document") => Ok(Some(ResourceType::Document)),
            Some(other) => Err(AppError::BadRequest(format!(
                "Invalid resource_type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParam {
    pub section: Option<String>,
}
