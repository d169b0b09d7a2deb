use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page position and size information of a paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageMetaDto {
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Relative navigation links of a paginated collection.
///
/// `next` and `prev` are null at the respective boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageLinksDto {
    #[serde(rename = "self")]
    pub self_link: String,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of a collection together with its metadata and links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    #[serde(rename = "_meta")]
    pub meta: PageMetaDto,
    #[serde(rename = "_links")]
    pub links: PageLinksDto,
}
