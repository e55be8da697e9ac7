//! Page-window computation for pagination controls.
//!
//! This module provides [`compute_visible_pages`], the pure function that
//! decides which page numbers a pagination control shows, and
//! [`Pagination`], a small state holder implementing the page-change
//! contract of the admin user list.

use serde::Serialize;

/// Default number of page buttons shown around the current page.
pub const DEFAULT_MAX_VISIBLE_PAGES: u32 = 5;

/// A single entry in a rendered page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    /// A clickable page number (1-based)
    Page(u32),
    /// A gap marker between non-adjacent page numbers
    Ellipsis,
}

impl PageItem {
    /// Return the page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<u32> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }

    /// Check whether this entry is an ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::Ellipsis)
    }
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// Compute the page numbers (and ellipsis markers) to display.
///
/// The window is centred on `current` and always `min(max_visible, total)`
/// pages wide; when it would run past either edge it slides back inside
/// `[1, total]`. Page 1 and page `total` are always shown, with an ellipsis
/// whenever the window does not touch them directly.
///
/// Callers must clamp `current` into `[1, total]` first. A `max_visible`
/// of zero is treated as one and a `total` of zero as one.
///
/// # Examples
///
/// ```
/// use marklee::domain::pagination::{compute_visible_pages, PageItem};
///
/// assert_eq!(compute_visible_pages(1, 1, 5), vec![PageItem::Page(1)]);
/// ```
pub fn compute_visible_pages(current: u32, total: u32, max_visible: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let max_visible = max_visible.max(1);

    let half = max_visible / 2;
    let width = max_visible.min(total);

    // Centre first, then slide back inside [1, total] keeping the width.
    let start = current.saturating_sub(half).max(1);
    let start = start.min(total - width + 1);
    let end = start + width - 1;

    let mut items = Vec::with_capacity(width as usize + 4);

    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }

    items
}

/// Pagination state backing a page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Currently selected page (1-based)
    pub current_page: u32,
    /// Total number of pages (at least 1)
    pub total_pages: u32,
    /// Maximum number of window pages shown around the current one
    pub max_visible_pages: u32,
}

impl PaginationState {
    /// Create a new state, clamping the inputs to valid ranges.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self::with_max_visible(current_page, total_pages, DEFAULT_MAX_VISIBLE_PAGES)
    }

    /// Create a new state with an explicit window size.
    pub fn with_max_visible(current_page: u32, total_pages: u32, max_visible_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            max_visible_pages: max_visible_pages.max(1),
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Page-number control model.
///
/// Wraps a [`PaginationState`] and only reports a page change when the
/// selected page is in range and differs from the current one.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    state: PaginationState,
}

impl Pagination {
    /// Create a control positioned on `current_page`.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            state: PaginationState::new(current_page, total_pages),
        }
    }

    /// Create a control from an existing state.
    pub fn from_state(state: PaginationState) -> Self {
        Self {
            state: PaginationState::with_max_visible(
                state.current_page,
                state.total_pages,
                state.max_visible_pages,
            ),
        }
    }

    /// Set the window size.
    pub fn with_max_visible(mut self, max_visible_pages: u32) -> Self {
        self.state.max_visible_pages = max_visible_pages.max(1);
        self
    }

    /// Get the current state.
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Get the currently selected page.
    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    /// Get the total page count.
    pub fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    /// Replace the total page count, e.g. after a refetch.
    ///
    /// The current page is pulled back inside the new range.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.state = PaginationState::with_max_visible(
            self.state.current_page,
            total_pages,
            self.state.max_visible_pages,
        );
    }

    /// The page window to render.
    pub fn items(&self) -> Vec<PageItem> {
        compute_visible_pages(
            self.state.current_page,
            self.state.total_pages,
            self.state.max_visible_pages,
        )
    }

    /// Select a page.
    ///
    /// Returns `Some(page)` when the selection changed the current page,
    /// which is the caller's cue to fire its page-change handler. Out of
    /// range or unchanged selections return `None` and leave state alone.
    pub fn select(&mut self, page: u32) -> Option<u32> {
        if page < 1 || page > self.state.total_pages || page == self.state.current_page {
            return None;
        }
        self.state.current_page = page;
        Some(page)
    }

    /// Move to the next page, if any.
    pub fn next(&mut self) -> Option<u32> {
        self.select(self.state.current_page.saturating_add(1))
    }

    /// Move to the previous page, if any.
    pub fn previous(&mut self) -> Option<u32> {
        self.select(self.state.current_page.saturating_sub(1))
    }

    /// Check if a next page exists.
    pub fn has_next(&self) -> bool {
        self.state.current_page < self.state.total_pages
    }

    /// Check if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.state.current_page > 1
    }
}

/// Render a window as a compact string, e.g. `1 ... 4 5 6 ... 10`.
pub fn format_page_window(items: &[PageItem]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items.iter().filter_map(|i| i.page()).collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(compute_visible_pages(1, 1, 5), vec![PageItem::Page(1)]);
    }

    #[test]
    fn test_middle_of_ten() {
        let items = compute_visible_pages(5, 10, 5);
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_slides_right_at_start() {
        let items = compute_visible_pages(1, 10, 5);
        assert_eq!(pages(&items), vec![1, 2, 3, 4, 5, 10]);
        assert_eq!(items[5], PageItem::Ellipsis);
    }

    #[test]
    fn test_window_slides_left_at_end() {
        let items = compute_visible_pages(10, 10, 5);
        assert_eq!(pages(&items), vec![1, 6, 7, 8, 9, 10]);
        assert_eq!(items[1], PageItem::Ellipsis);
    }

    #[test]
    fn test_no_ellipsis_when_adjacent() {
        // Window 2..=6 touches page 1 directly
        let items = compute_visible_pages(4, 7, 5);
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
            ]
        );
    }

    #[test]
    fn test_total_smaller_than_window() {
        assert_eq!(pages(&compute_visible_pages(2, 3, 5)), vec![1, 2, 3]);
        assert!(!compute_visible_pages(2, 3, 5).iter().any(|i| i.is_ellipsis()));
    }

    #[test]
    fn test_zero_max_visible_treated_as_one() {
        assert_eq!(
            compute_visible_pages(3, 5, 0),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(3),
                PageItem::Ellipsis,
                PageItem::Page(5),
            ]
        );
    }

    #[test]
    fn test_longest_output_is_window_plus_boundaries_and_ellipses() {
        let items = compute_visible_pages(5, 10, 5);
        assert_eq!(format_page_window(&items), "1 ... 3 4 5 6 7 ... 10");
        assert_eq!(items.len(), 5 + 4);
    }

    #[test]
    fn test_properties_exhaustive_small() {
        for total in 1..=30u32 {
            for max_visible in 1..=9u32 {
                for current in 1..=total {
                    let items = compute_visible_pages(current, total, max_visible);
                    let nums = pages(&items);

                    assert_eq!(
                        nums.iter().filter(|&&n| n == current).count(),
                        1,
                        "current {} missing or repeated for total={} max={}",
                        current,
                        total,
                        max_visible
                    );

                    let unique: HashSet<_> = nums.iter().collect();
                    assert_eq!(unique.len(), nums.len());
                    assert!(nums.windows(2).all(|w| w[0] < w[1]));
                    assert!(nums.len() as u32 <= max_visible + 2);
                    assert!(items.iter().filter(|i| i.is_ellipsis()).count() <= 2);
                    assert!(
                        items.len() as u32 <= max_visible + 4,
                        "{} entries for current={} total={} max={}",
                        items.len(),
                        current,
                        total,
                        max_visible
                    );

                    assert!(items
                        .windows(2)
                        .all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())));
                    assert_eq!(nums.first(), Some(&1));
                    assert_eq!(nums.last(), Some(&total));
                }
            }
        }
    }

    #[test]
    fn test_pagination_select_in_range() {
        let mut p = Pagination::new(1, 5);
        assert_eq!(p.select(3), Some(3));
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_pagination_select_rejects_unchanged_and_out_of_range() {
        let mut p = Pagination::new(2, 5);
        assert_eq!(p.select(2), None);
        assert_eq!(p.select(0), None);
        assert_eq!(p.select(6), None);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_pagination_next_previous() {
        let mut p = Pagination::new(1, 2);
        assert!(!p.has_previous());
        assert_eq!(p.previous(), None);
        assert_eq!(p.next(), Some(2));
        assert!(!p.has_next());
        assert_eq!(p.next(), None);
        assert_eq!(p.previous(), Some(1));
    }

    #[test]
    fn test_state_clamps_inputs() {
        let state = PaginationState::new(9, 4);
        assert_eq!(state.current_page, 4);
        let state = PaginationState::new(0, 0);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn test_set_total_pages_pulls_current_back() {
        let mut p = Pagination::new(8, 10);
        p.set_total_pages(3);
        assert_eq!(p.current_page(), 3);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn test_format_page_window() {
        let items = compute_visible_pages(5, 10, 3);
        assert_eq!(format_page_window(&items), "1 ... 4 5 6 ... 10");
    }
}
