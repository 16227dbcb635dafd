//! Pagination types for list queries
//!
//! Pages are 1-indexed. A request is normalized once, on construction, so
//! the store layer can trust `limit()` and `offset()`.

use serde::Serialize;

/// Default page size when the client does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the page size unless configured otherwise
pub const MAX_PAGE_SIZE: i64 = 100;

/// Normalized pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Build a request from optional client input.
    ///
    /// Missing values fall back to page 1 and `default_size`; out-of-range
    /// values are clamped into `1..` and `1..=max_size`.
    pub fn new(page: Option<i64>, size: Option<i64>, default_size: i64, max_size: i64) -> Self {
        let max_size = max_size.max(1);
        Self {
            page: page.unwrap_or(1).max(1),
            size: size.unwrap_or(default_size).clamp(1, max_size),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// SQL limit
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// SQL offset
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

/// One page of results plus the size of the full match set
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            size: request.size(),
        }
    }

    /// Last page number; 1 for an empty result
    pub fn last_page(&self) -> i64 {
        if self.total <= 0 {
            1
        } else {
            (self.total + self.size - 1) / self.size
        }
    }

    /// 1-based position of the first item on this page, if any
    pub fn from(&self) -> Option<i64> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.page - 1) * self.size + 1)
        }
    }

    /// 1-based position of the last item on this page, if any
    pub fn to(&self) -> Option<i64> {
        self.from().map(|from| from + self.items.len() as i64 - 1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
