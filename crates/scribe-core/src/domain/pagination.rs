//! Paging windows for list endpoints.
//!
//! Out-of-range or unparsable inputs fall back to the defaults instead of
//! failing the request.

use scribe_shared::dto::{PageQuery, WindowQuery};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page-numbered window used by the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = page.filter(|p| *p > 0).map(|p| p as u64).unwrap_or(1);
        let page_size = page_size
            .filter(|s| (1..=MAX_PAGE_SIZE as i64).contains(s))
            .map(|s| s as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self { page, page_size }
    }

    pub fn from_query(query: &PageQuery) -> Self {
        Self::new(parse(query.page.as_deref()), parse(query.page_size.as_deref()))
    }

    /// Rows to skip, saturating at `i64::MAX` so far pages stay bindable.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.page_size)
    }
}

/// Limit/offset window used by the author listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl Window {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = limit
            .filter(|l| (1..=MAX_PAGE_SIZE as i64).contains(l))
            .map(|l| l as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = offset.filter(|o| *o >= 0).map(|o| o as u64).unwrap_or(0);

        Self { limit, offset }
    }

    pub fn from_query(query: &WindowQuery) -> Self {
        Self::new(parse(query.limit.as_deref()), parse(query.offset.as_deref()))
    }
}

fn parse(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        assert_eq!(Pagination::new(None, None), Pagination::default());
    }

    #[test]
    fn pagination_rejects_out_of_range_values() {
        let p = Pagination::new(Some(0), Some(101));
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);

        let p = Pagination::new(Some(-3), Some(0));
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn pagination_offset_and_total_pages() {
        let p = Pagination::new(Some(3), Some(20));
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(20), 1);
        assert_eq!(p.total_pages(21), 2);
    }

    #[test]
    fn pagination_offset_saturates_on_huge_pages() {
        let query = PageQuery {
            page: Some("9223372036854775807".to_string()),
            page_size: Some("100".to_string()),
        };
        let p = Pagination::from_query(&query);

        assert_eq!(p.page, i64::MAX as u64);
        assert_eq!(p.offset(), i64::MAX as u64);
        assert_eq!(p.limit(), 100);

        let p = Pagination::new(Some(i64::MAX / 10), Some(10));
        assert_eq!(p.offset(), (i64::MAX / 10 - 1) as u64 * 10);
    }

    #[test]
    fn pagination_ignores_garbage_query_values() {
        let query = PageQuery {
            page: Some("two".to_string()),
            page_size: Some("25".to_string()),
        };
        let p = Pagination::from_query(&query);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 25);
    }

    #[test]
    fn window_bounds() {
        assert_eq!(Window::new(Some(100), Some(5)), Window { limit: 100, offset: 5 });
        assert_eq!(Window::new(Some(101), Some(-1)), Window::default());
    }
}
