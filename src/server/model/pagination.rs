//! Page requests and paginated result sets.
//!
//! Pages are 1-based at the API boundary. `PageRequest::index()` yields the
//! 0-based page expected by SeaORM's paginator.

use url::form_urlencoded;

use crate::{
    model::pagination::{PageLinksDto, PageMetaDto, PaginatedDto},
    server::error::AppError,
};

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

/// Validated page position requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Validates raw query values.
    ///
    /// Missing values default to page 1 and [`DEFAULT_PER_PAGE`]; `per_page` above
    /// [`MAX_PER_PAGE`] is clamped.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Valid request
    /// - `Err(AppError::BadRequest)` - `page` or `per_page` below 1
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE as i64);

        if page < 1 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }
        if per_page < 1 {
            return Err(AppError::BadRequest(
                "per_page must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            page: page as u64,
            per_page: (per_page as u64).min(MAX_PER_PAGE),
        })
    }

    /// 0-based page index.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of items plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total_items,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.per_page)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
        }
    }

    /// Converts the page into its wire form.
    ///
    /// Links are relative URLs of `path` carrying `page`, `per_page` and any
    /// extra `filters` as query parameters.
    ///
    /// # Arguments
    /// - `path` - Endpoint path, e.g. `/api/calendar/events`
    /// - `filters` - Additional query parameters to repeat in every link
    /// - `f` - Converts each item to its DTO
    pub fn into_dto<D>(
        self,
        path: &str,
        filters: &[(&str, &str)],
        f: impl FnMut(T) -> D,
    ) -> PaginatedDto<D> {
        let total_pages = self.total_pages();
        let link = |page: u64| page_link(path, page, self.per_page, filters);

        let links = PageLinksDto {
            self_link: link(self.page),
            next: self.has_next().then(|| link(self.page + 1)),
            prev: self.has_prev().then(|| link(self.page - 1)),
        };
        let meta = PageMetaDto {
            page: self.page,
            per_page: self.per_page,
            total_pages,
            total_items: self.total_items,
        };

        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            meta,
            links,
        }
    }
}

fn page_link(path: &str, page: u64, per_page: u64, filters: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("page", &page.to_string())
        .append_pair("per_page", &per_page.to_string());
    for (key, value) in filters {
        query.append_pair(key, value);
    }

    format!("{}?{}", path, query.finish())
}
