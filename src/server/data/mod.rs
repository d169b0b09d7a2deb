//! Database repository layer for all domain entities.
//!
//! Repositories hold a `&DatabaseConnection`, use SeaORM entity models internally
//! and return domain models. Reads of user-owned records take the owner's id and
//! return `None` for records owned by anyone else.

pub mod attachment;
pub mod calendar_event;
pub mod communication;
pub mod contact;
pub mod resource;
pub mod user;

/// Whether a 0-based `page` of `per_page` rows starts inside `total` rows.
///
/// Pages past the end are answered without a query, so an absurd page number
/// never reaches the database as an out-of-range offset.
pub(crate) fn page_in_range(page: u64, per_page: u64, total: u64) -> bool {
    page.checked_mul(per_page).is_some_and(|offset| offset < total)
}

#[cfg(test)]
mod test;
