//! Page bounds derived from raw request input
//!
//! Absent or out-of-range values are clamped, never rejected.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_INDEX: u64 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 50;

/// Zero-based page position and page size, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    index: u64,
    size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: DEFAULT_PAGE_INDEX,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Clamps raw request values: `index` is floored at zero, `size` is
    /// bounded to `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
    pub fn from_raw(page: Option<i64>, size: Option<i64>) -> Self {
        let index = page.map_or(DEFAULT_PAGE_INDEX, |p| p.max(0) as u64);
        let size = size.map_or(DEFAULT_PAGE_SIZE, |s| {
            s.clamp(i64::from(MIN_PAGE_SIZE), i64::from(MAX_PAGE_SIZE)) as u32
        });
        Self { index, size }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        self.index.saturating_mul(u64::from(self.size))
    }
}

/// `ceil(total / size)`; zero when there are no elements.
pub fn total_pages(total_elements: u64, size: u32) -> u64 {
    if size == 0 {
        return 0;
    }
    total_elements.div_ceil(u64::from(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let page = PageRequest::from_raw(None, None);
        assert_eq!((page.index(), page.size()), (0, 20));
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn negative_index_is_floored() {
        assert_eq!(PageRequest::from_raw(Some(-5), None).index(), 0);
        assert_eq!(PageRequest::from_raw(Some(i64::MIN), None).index(), 0);
        assert_eq!(PageRequest::from_raw(Some(3), None).index(), 3);
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(PageRequest::from_raw(None, Some(999)).size(), 50);
        assert_eq!(PageRequest::from_raw(None, Some(0)).size(), 1);
        assert_eq!(PageRequest::from_raw(None, Some(-7)).size(), 1);
        assert_eq!(PageRequest::from_raw(None, Some(50)).size(), 50);
        assert_eq!(PageRequest::from_raw(None, Some(1)).size(), 1);
        assert_eq!(PageRequest::from_raw(None, Some(i64::MAX)).size(), 50);
    }

    #[test]
    fn derivation_is_idempotent() {
        let first = PageRequest::from_raw(Some(-1), Some(80));
        let again = PageRequest::from_raw(
            Some(first.index() as i64),
            Some(i64::from(first.size())),
        );
        assert_eq!(first, again);
    }

    #[test]
    fn offset_saturates() {
        let page = PageRequest::from_raw(Some(i64::MAX), Some(50));
        assert_eq!(page.offset(), u64::MAX);
        assert_eq!(PageRequest::from_raw(Some(2), Some(10)).offset(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(7, 0), 0);
    }
}
