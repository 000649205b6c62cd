//! Offset pagination: the request parameters and the page envelope.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_NUMBER: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Which page to read. `page_size` is clamped to [`MAX_PAGE_SIZE`] on
/// construction rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParameters {
    page_number: u64,
    page_size: u64,
}

impl PaginationParameters {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number,
            page_size: page_size.min(MAX_PAGE_SIZE),
        }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn is_valid(&self) -> bool {
        self.page_number >= 1 && (1..=MAX_PAGE_SIZE).contains(&self.page_size)
    }
}

impl Default for PaginationParameters {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// `?pageNumber=&pageSize=` as sent by clients.
///
/// Signed so that negative input reaches validation instead of failing to
/// parse.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    #[serde(default = "default_page_number")]
    #[validate(range(
        min = 1,
        message = "'Page Number' must be greater than or equal to '1'."
    ))]
    pub page_number: i64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "'Page Size' must be greater than or equal to '1'."))]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER as i64
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

impl From<PaginationQuery> for PaginationParameters {
    fn from(query: PaginationQuery) -> Self {
        // Out-of-range input maps to 0, which `is_valid` rejects
        Self::new(
            u64::try_from(query.page_number).unwrap_or(0),
            u64::try_from(query.page_size).unwrap_or(0),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, page_number: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };

        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
            has_previous: page_number > 1,
            has_next: page_number < total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
