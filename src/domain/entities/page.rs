//! Pagination primitives shared by repositories and handlers.

use serde::Serialize;

/// A normalized page request. Always 1-based with a non-zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Builds a request, clamping `page` to at least 1 and `page_size` to
    /// `1..=max_page_size`.
    pub fn new(page: u32, page_size: u32, max_page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_page_size.max(1)),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: i64) -> Self {
        let size = i64::from(request.page_size);
        let total_pages = if total <= 0 { 0 } else { (total + size - 1) / size };

        Self {
            data,
            page: request.page,
            page_size: request.page_size,
            total,
            total_pages,
        }
    }
}
