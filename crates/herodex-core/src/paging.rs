//! Paging arithmetic for the record stores.
//!
//! A [`Page`] is the immutable window descriptor every backend consumes;
//! the [`PagingService`] owns the navigation state (current page, rows per
//! page) and the derived last page. Clamping happens here, never inside
//! `Page` itself.

use crate::error::HerodexError;
use crate::result::HerodexResult;

/// The first page of data in any store.
pub const FIRST_PAGE: u32 = 1;

/// A page of records: "page `number`, with `rows` rows per page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
    rows: u32,
}

impl Page {
    /// Create a page descriptor. Fails on `number < 1` or `rows < 1`;
    /// out-of-range values are never silently clamped at this layer.
    pub fn new(number: u32, rows: u32) -> HerodexResult<Self> {
        if number < FIRST_PAGE {
            return Err(HerodexError::Validation(format!(
                "page number must be at least {}, got {}",
                FIRST_PAGE, number
            )));
        }
        if rows < 1 {
            return Err(HerodexError::Validation(
                "rows per page must be at least 1".to_string(),
            ));
        }
        Ok(Self { number, rows })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of records that precede this page.
    pub fn offset(&self) -> usize {
        (self.number as usize - 1) * self.rows as usize
    }

    /// Maximum number of records the page may hold.
    pub fn limit(&self) -> usize {
        self.rows as usize
    }
}

/// Navigation state over a paged store.
///
/// `last_page` is derived from the store size and is recomputed through
/// [`PagingService::set_store_size`]; callers must push the current size in
/// before making a navigation decision, because mutations change the size
/// between renders. After every recompute the invariant
/// `FIRST_PAGE <= current_page <= max(last_page, FIRST_PAGE)` holds: an
/// empty store has `last_page == 0` but still parks on page 1.
#[derive(Debug, Clone)]
pub struct PagingService {
    current_page: u32,
    rows_per_page: u32,
    last_page: u32,
}

impl PagingService {
    /// Create a paging service. `rows_per_page < 1` is rejected.
    pub fn new(store_size: usize, rows_per_page: u32) -> HerodexResult<Self> {
        if rows_per_page < 1 {
            return Err(HerodexError::Validation(
                "rows per page must be at least 1".to_string(),
            ));
        }
        let mut service = Self {
            current_page: FIRST_PAGE,
            rows_per_page,
            last_page: 0,
        };
        service.set_store_size(store_size);
        Ok(service)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    /// Recompute `last_page` from the store's size and re-clamp the current
    /// page. `size == 0` yields `last_page == 0`.
    pub fn set_store_size(&mut self, size: usize) {
        self.last_page = (size as u64).div_ceil(self.rows_per_page as u64) as u32;
        self.current_page = self.clamped(self.current_page as i64);
    }

    /// Jump to a page, clamping into `[FIRST_PAGE, max(last_page, FIRST_PAGE)]`.
    pub fn jump_to_page(&mut self, number: i64) {
        self.current_page = self.clamped(number);
    }

    /// Advance one page, but never past `last_page`.
    pub fn next_page(&mut self) {
        if self.current_page < self.last_page {
            self.current_page += 1;
        }
    }

    /// Retreat one page, but never before `FIRST_PAGE`.
    pub fn previous_page(&mut self) {
        if self.current_page > FIRST_PAGE {
            self.current_page -= 1;
        }
    }

    /// The inclusive range `FIRST_PAGE..=last_page`; empty for an empty store.
    pub fn page_range(&self) -> impl Iterator<Item = u32> {
        FIRST_PAGE..=self.last_page
    }

    /// The current navigation state as a [`Page`] usable against a store.
    pub fn current_data_page(&self) -> Page {
        // current_page >= FIRST_PAGE and rows_per_page >= 1 are invariants.
        Page {
            number: self.current_page,
            rows: self.rows_per_page,
        }
    }

    fn clamped(&self, number: i64) -> u32 {
        let upper = self.last_page.max(FIRST_PAGE) as i64;
        number.clamp(FIRST_PAGE as i64, upper) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_rejects_zero_number() {
        assert!(Page::new(0, 10).is_err());
    }

    #[test]
    fn test_page_rejects_zero_rows() {
        assert!(Page::new(1, 0).is_err());
    }

    #[test]
    fn test_page_offset_and_limit() {
        let page = Page::new(4, 3).unwrap();
        assert_eq!(page.offset(), 9);
        assert_eq!(page.limit(), 3);

        let first = Page::new(1, 25).unwrap();
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_service_rejects_zero_rows_per_page() {
        assert!(PagingService::new(10, 0).is_err());
    }

    #[test]
    fn test_last_page_is_ceiling_of_size_over_rows() {
        for (size, rows, expected) in [(10, 10, 1), (40, 5, 8), (11, 3, 4), (1, 7, 1)] {
            let service = PagingService::new(size, rows).unwrap();
            assert_eq!(service.last_page(), expected, "size {} rows {}", size, rows);
        }
    }

    #[test]
    fn test_empty_store_has_last_page_zero_and_parks_on_first() {
        let service = PagingService::new(0, 7).unwrap();
        assert_eq!(service.last_page(), 0);
        assert_eq!(service.current_page(), FIRST_PAGE);
        assert_eq!(service.page_range().count(), 0);
    }

    #[test]
    fn test_jump_clamps_every_direction() {
        let mut service = PagingService::new(100, 25).unwrap();
        assert_eq!(service.last_page(), 4);

        service.jump_to_page(-1);
        assert_eq!(service.current_page(), FIRST_PAGE);

        service.jump_to_page(2);
        assert_eq!(service.current_page(), 2);

        service.jump_to_page(i64::MAX);
        assert_eq!(service.current_page(), 4);
    }

    #[test]
    fn test_jump_on_empty_store_stays_on_first_page() {
        let mut service = PagingService::new(0, 5).unwrap();
        service.jump_to_page(3);
        assert_eq!(service.current_page(), FIRST_PAGE);
        service.jump_to_page(-7);
        assert_eq!(service.current_page(), FIRST_PAGE);
    }

    #[test]
    fn test_next_at_last_and_previous_at_first_are_noops() {
        let mut service = PagingService::new(6, 3).unwrap();
        assert_eq!(service.last_page(), 2);

        service.previous_page();
        assert_eq!(service.current_page(), FIRST_PAGE);

        service.next_page();
        service.next_page();
        assert_eq!(service.current_page(), 2);
        service.next_page();
        assert_eq!(service.current_page(), 2);
    }

    #[test]
    fn test_set_store_size_reclamps_current_page() {
        let mut service = PagingService::new(20, 5).unwrap();
        service.jump_to_page(4);
        assert_eq!(service.current_page(), 4);

        // Deletions shrank the store; the current page must follow.
        service.set_store_size(7);
        assert_eq!(service.last_page(), 2);
        assert_eq!(service.current_page(), 2);

        service.set_store_size(0);
        assert_eq!(service.last_page(), 0);
        assert_eq!(service.current_page(), FIRST_PAGE);
    }

    #[test]
    fn test_growth_updates_last_page_before_jump() {
        let mut service = PagingService::new(10, 10).unwrap();
        assert_eq!(service.last_page(), 1);

        service.set_store_size(11);
        service.jump_to_page(2);
        assert_eq!(service.last_page(), 2);
        assert_eq!(service.current_page(), 2);
    }

    #[test]
    fn test_page_range_spans_first_to_last() {
        let service = PagingService::new(50, 5).unwrap();
        let range: Vec<u32> = service.page_range().collect();
        assert_eq!(range, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_current_data_page_mirrors_state() {
        let mut service = PagingService::new(11, 3).unwrap();
        service.jump_to_page(10);
        assert_eq!(service.current_page(), 4);

        let page = service.current_data_page();
        assert_eq!(page.number(), 4);
        assert_eq!(page.rows(), 3);
        assert_eq!(page.offset(), 9);
    }
}
