//! Paging for the services carousel.

use std::ops::Range;

/// A window of `per_page` items over a list of `len`, plus the selected item.
///
/// The active item always lies on the visible page: paging snaps it to the
/// first item of the new page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    per_page: usize,
    page: usize,
    active: usize,
}

impl Pager {
    pub const SERVICES_PER_PAGE: usize = 5;

    pub fn new(len: usize, per_page: usize) -> Self {
        Self {
            len,
            per_page: per_page.max(1),
            page: 0,
            active: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.per_page).max(1)
    }

    pub fn can_go_left(&self) -> bool {
        self.page > 0
    }

    pub fn can_go_right(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Indices shown on the current page.
    pub fn visible(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.len);
        start..(start + self.per_page).min(self.len)
    }

    pub fn go_left(&mut self) -> bool {
        if !self.can_go_left() {
            return false;
        }
        self.page -= 1;
        self.active = self.visible().start;
        true
    }

    pub fn go_right(&mut self) -> bool {
        if !self.can_go_right() {
            return false;
        }
        self.page += 1;
        self.active = self.visible().start;
        true
    }

    /// Jump straight to `page`, snapping the active item onto it. Pages past
    /// the end and the current page are ignored.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= self.total_pages() || page == self.page {
            return false;
        }
        self.page = page;
        self.active = self.visible().start;
        true
    }

    /// Select an item. Items off the current page are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if self.visible().contains(&index) {
            self.active = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_services_two_pages() {
        let mut pager = Pager::new(10, Pager::SERVICES_PER_PAGE);
        assert_eq!(pager.total_pages(), 2);
        assert!(!pager.can_go_left());
        assert!(pager.can_go_right());
        assert_eq!(pager.visible(), 0..5);

        pager.select(3);
        assert!(pager.go_right());
        assert_eq!(pager.visible(), 5..10);
        assert_eq!(pager.active(), 5);
        assert!(!pager.can_go_right());
        assert!(!pager.go_right());

        assert!(pager.go_left());
        assert_eq!(pager.active(), 0);
    }

    #[test]
    fn test_partial_last_page() {
        let mut pager = Pager::new(7, 5);
        pager.go_right();
        assert_eq!(pager.visible(), 5..7);
    }

    #[test]
    fn test_select_off_page_ignored() {
        let mut pager = Pager::new(10, 5);
        assert!(!pager.select(7));
        assert_eq!(pager.active(), 0);
    }

    #[test]
    fn test_go_to_snaps_active() {
        let mut pager = Pager::new(12, 5);
        pager.select(2);
        assert!(pager.go_to(2));
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.visible(), 10..12);
        assert_eq!(pager.active(), 10);

        assert!(pager.go_to(0));
        assert_eq!(pager.active(), 0);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut pager = Pager::new(10, 5);
        pager.select(4);
        assert!(!pager.go_to(2));
        assert!(!pager.go_to(usize::MAX));
        assert!(!pager.go_to(0));
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.active(), 4);
    }

    #[test]
    fn test_empty() {
        let pager = Pager::new(0, 5);
        assert_eq!(pager.total_pages(), 1);
        assert!(pager.visible().is_empty());
        assert!(!pager.can_go_right());
    }
}
