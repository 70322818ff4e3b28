//! Visible-set navigation over a filtered gallery.
//!
//! [`Navigator`] is the computation core of the lightbox: given the fixed
//! item sequence and the active [`CategoryFilter`], it answers "what opens
//! next", "what opens previous", and "where am I among the visible items".
//! It holds no presentation state and emits no signals; the widget layer
//! wraps it and notifies.

use std::sync::Arc;

use super::filter::CategoryFilter;
use super::gallery::Gallery;
use super::item::GalleryItem;

/// Navigation state over a gallery: the current open index and the active
/// filter.
///
/// The current index is `-1` while closed, otherwise a valid index into the
/// gallery. Navigation transitions (`next`/`prev`) only ever land on visible
/// items; `open` trusts its caller, and `set_filter` deliberately leaves the
/// current index alone (see [`set_filter`](Self::set_filter)).
///
/// All operations are synchronous and bounded by one pass over the sequence.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vitrine::model::{CategoryFilter, Gallery, GalleryItem, Navigator};
///
/// let gallery = Arc::new(Gallery::new(vec![
///     GalleryItem::new("a.jpg", "A", "nature"),
///     GalleryItem::new("b.jpg", "B", "travel"),
///     GalleryItem::new("c.jpg", "C", "nature"),
/// ]));
///
/// let mut nav = Navigator::new(gallery);
/// nav.set_filter(CategoryFilter::category("nature"));
/// nav.open(0);
/// assert_eq!(nav.next(), Some(2)); // skips the hidden "travel" item
/// assert_eq!(nav.next(), Some(0)); // wraps around
/// assert_eq!(nav.position(0), (1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    gallery: Arc<Gallery>,
    /// Current open index, or -1 while closed.
    current: i32,
    filter: CategoryFilter,
}

impl Navigator {
    /// Create a closed navigator over the given gallery with the "all"
    /// filter active.
    pub fn new(gallery: Arc<Gallery>) -> Self {
        Self {
            gallery,
            current: -1,
            filter: CategoryFilter::All,
        }
    }

    /// The gallery this navigator walks.
    pub fn gallery(&self) -> &Arc<Gallery> {
        &self.gallery
    }

    // =========================================================================
    // Current Index
    // =========================================================================

    /// The current open index, or -1 while closed.
    pub fn current_index(&self) -> i32 {
        self.current
    }

    /// Whether an item is currently open.
    pub fn is_open(&self) -> bool {
        self.current >= 0
    }

    /// The currently open item, or `None` while closed.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        if self.current < 0 {
            None
        } else {
            self.gallery.get(self.current as usize)
        }
    }

    /// Open the item at `index` unconditionally.
    ///
    /// No visibility check is applied: callers opening an item directly (a
    /// card activation) are expected to pass a visible index. An
    /// out-of-range index is a caller precondition failure and is treated as
    /// a no-op returning `None`.
    ///
    /// Returns the item for display.
    pub fn open(&mut self, index: usize) -> Option<&GalleryItem> {
        if index >= self.gallery.len() {
            tracing::warn!(
                target: "vitrine::navigator",
                index,
                len = self.gallery.len(),
                "open called with out-of-range index, ignoring"
            );
            return None;
        }
        self.current = index as i32;
        self.gallery.get(index)
    }

    /// Close the navigator, resetting the current index to -1.
    pub fn close(&mut self) {
        self.current = -1;
    }

    // =========================================================================
    // Cyclic Navigation
    // =========================================================================

    /// Advance to the next visible item, wrapping around at the end of the
    /// sequence.
    ///
    /// The forward scan starts at `current + 1` and covers the full sequence
    /// length, so on a complete wrap it reaches the current slot itself: when
    /// exactly one item is visible and it is the current one, `next()`
    /// re-opens it. That inclusive wraparound is intentional, matching the
    /// reference gallery behavior.
    ///
    /// Returns the newly opened index, or `None` (state unchanged) when the
    /// navigator is closed or no item is visible.
    pub fn next(&mut self) -> Option<usize> {
        if self.current < 0 {
            return None;
        }
        let n = self.gallery.len();
        let start = self.current as usize + 1;
        for step in 0..n {
            let index = (start + step) % n;
            if self.is_visible(index) {
                self.current = index as i32;
                tracing::trace!(target: "vitrine::navigator", index, "advanced to next visible item");
                return Some(index);
            }
        }
        None
    }

    /// Step back to the previous visible item, wrapping around at the start
    /// of the sequence.
    ///
    /// Symmetric to [`next`](Self::next): the backward scan starts at
    /// `current - 1` and includes the current slot on full wrap.
    pub fn prev(&mut self) -> Option<usize> {
        if self.current < 0 {
            return None;
        }
        let n = self.gallery.len() as i64;
        let start = self.current as i64 - 1;
        for step in 0..n {
            let index = (start - step).rem_euclid(n) as usize;
            if self.is_visible(index) {
                self.current = index as i32;
                tracing::trace!(target: "vitrine::navigator", index, "stepped to previous visible item");
                return Some(index);
            }
        }
        None
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// The active filter.
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Replace the active filter.
    ///
    /// This never changes the open index and never auto-closes: if the open
    /// item becomes hidden under the new filter, it stays on display until
    /// the user navigates or closes. Navigation transitions from a hidden
    /// item still land on visible ones.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        tracing::debug!(target: "vitrine::navigator", %filter, "filter changed");
        self.filter = filter;
    }

    /// Whether the item at `index` passes the active filter.
    ///
    /// Out-of-range indices are not visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.gallery
            .get(index)
            .is_some_and(|item| self.filter.matches(item))
    }

    /// The number of items passing the active filter.
    pub fn visible_count(&self) -> usize {
        self.gallery
            .iter()
            .filter(|item| self.filter.matches(item))
            .count()
    }

    /// Indices of all visible items, in sequence order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.gallery
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(item))
            .map(|(index, _)| index)
            .collect()
    }

    // =========================================================================
    // Position Reporting
    // =========================================================================

    /// The `(position, total)` pair for the counter display.
    ///
    /// `total` is the visible count, falling back to the full sequence
    /// length when nothing is visible so the counter never reads "0 / 0".
    /// `position` is the 1-based rank of `index` among the visible items in
    /// sequence order, or 0 when `index` is not visible.
    pub fn position(&self, index: usize) -> (usize, usize) {
        let visible = self.visible_indices();
        let total = if visible.is_empty() {
            self.gallery.len()
        } else {
            visible.len()
        };
        let position = visible
            .iter()
            .position(|&i| i == index)
            .map_or(0, |rank| rank + 1);
        (position, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorized(labels: &[&str]) -> Arc<Gallery> {
        Arc::new(Gallery::new(
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    GalleryItem::new(format!("img{i}.jpg"), format!("Item {i}"), *label)
                })
                .collect(),
        ))
    }

    #[test]
    fn test_starts_closed_with_all_filter() {
        let nav = Navigator::new(categorized(&["a", "b"]));
        assert_eq!(nav.current_index(), -1);
        assert!(!nav.is_open());
        assert!(nav.current_item().is_none());
        assert!(nav.filter().is_all());
    }

    #[test]
    fn test_open_and_close() {
        let mut nav = Navigator::new(categorized(&["a", "b", "c"]));

        let item = nav.open(1).cloned();
        assert_eq!(item.unwrap().caption, "Item 1");
        assert_eq!(nav.current_index(), 1);
        assert!(nav.is_open());

        nav.close();
        assert_eq!(nav.current_index(), -1);
        assert!(nav.current_item().is_none());
    }

    #[test]
    fn test_open_out_of_range_is_a_noop() {
        let mut nav = Navigator::new(categorized(&["a", "b"]));
        nav.open(0);

        assert!(nav.open(2).is_none());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_next_and_prev_are_noops_while_closed() {
        let mut nav = Navigator::new(categorized(&["a", "b"]));
        assert_eq!(nav.next(), None);
        assert_eq!(nav.prev(), None);
        assert_eq!(nav.current_index(), -1);
    }

    #[test]
    fn test_next_skips_hidden_items() {
        // Categories [a, a, b, a, b], filter "b": visible {2, 4}.
        let mut nav = Navigator::new(categorized(&["a", "a", "b", "a", "b"]));
        nav.set_filter(CategoryFilter::category("b"));

        nav.open(2);
        assert_eq!(nav.next(), Some(4));
        assert_eq!(nav.position(4), (2, 2));
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut nav = Navigator::new(categorized(&["a", "a", "a"]));
        nav.open(0);
        assert_eq!(nav.prev(), Some(2));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut nav = Navigator::new(categorized(&["a", "a", "a"]));
        nav.open(2);
        assert_eq!(nav.next(), Some(0));
    }

    #[test]
    fn test_next_then_prev_is_inverse_with_multiple_visible() {
        let mut nav = Navigator::new(categorized(&["a", "b", "a", "b", "a"]));
        nav.set_filter(CategoryFilter::category("a"));

        for start in [0usize, 2, 4] {
            nav.open(start);
            nav.next();
            nav.prev();
            assert_eq!(nav.current_index(), start as i32);
        }
    }

    #[test]
    fn test_sole_visible_item_reopens_on_wrap() {
        let mut nav = Navigator::new(categorized(&["a", "b", "a"]));
        nav.set_filter(CategoryFilter::category("b"));

        nav.open(1);
        let before = nav.position(1);
        assert_eq!(nav.next(), Some(1));
        assert_eq!(nav.prev(), Some(1));
        assert_eq!(nav.position(1), before);
    }

    #[test]
    fn test_no_visible_items_leaves_state_unchanged() {
        let mut nav = Navigator::new(categorized(&["a", "b"]));
        nav.open(0);
        nav.set_filter(CategoryFilter::category("c"));

        assert_eq!(nav.next(), None);
        assert_eq!(nav.prev(), None);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_filter_change_keeps_open_index() {
        // The open item staying on display when filtered out is the
        // documented behavior; only navigation re-lands on visible items.
        let mut nav = Navigator::new(categorized(&["a", "b", "b"]));
        nav.open(0);
        nav.set_filter(CategoryFilter::category("b"));

        assert_eq!(nav.current_index(), 0);
        assert!(!nav.is_visible(0));
        assert_eq!(nav.next(), Some(1));
    }

    #[test]
    fn test_position_under_all_filter() {
        let nav = Navigator::new(categorized(&["a", "b", "c"]));
        assert_eq!(nav.position(0), (1, 3));
        assert_eq!(nav.position(2), (3, 3));
        assert_eq!(nav.visible_count(), 3);
    }

    #[test]
    fn test_position_of_hidden_item_is_zero() {
        let mut nav = Navigator::new(categorized(&["a", "b", "a"]));
        nav.set_filter(CategoryFilter::category("a"));

        assert_eq!(nav.position(1), (0, 2));
        assert_eq!(nav.position(0), (1, 2));
        assert_eq!(nav.position(2), (2, 2));
    }

    #[test]
    fn test_position_total_falls_back_to_sequence_length() {
        // No visible items: the counter total falls back to N so the
        // display never reads "0 / 0".
        let mut nav = Navigator::new(categorized(&["a", "b", "a", "b", "a"]));
        nav.set_filter(CategoryFilter::category("c"));

        for index in 0..5 {
            assert_eq!(nav.position(index), (0, 5));
        }
    }

    #[test]
    fn test_position_is_within_total_when_visible() {
        let mut nav = Navigator::new(categorized(&["x", "y", "x", "x", "y"]));
        nav.set_filter(CategoryFilter::category("x"));

        for index in nav.visible_indices() {
            let (position, total) = nav.position(index);
            assert!(position >= 1 && position <= total);
        }
    }

    #[test]
    fn test_single_item_gallery() {
        let mut nav = Navigator::new(categorized(&["a"]));
        nav.open(0);
        assert_eq!(nav.next(), Some(0));
        assert_eq!(nav.prev(), Some(0));
        assert_eq!(nav.position(0), (1, 1));
    }

    #[test]
    fn test_uncategorized_items_hidden_by_specific_filter() {
        let gallery = Arc::new(Gallery::new(vec![
            GalleryItem::new("a.jpg", "A", "nature"),
            GalleryItem::uncategorized("b.jpg", "B"),
            GalleryItem::new("c.jpg", "C", "nature"),
        ]));
        let mut nav = Navigator::new(gallery);
        nav.set_filter(CategoryFilter::category("nature"));

        nav.open(0);
        assert_eq!(nav.next(), Some(2));
        assert_eq!(nav.visible_indices(), vec![0, 2]);
    }
}
