//! Modal lightbox viewer state.
//!
//! [`Lightbox`] wraps a [`Navigator`] and adds the modal-viewer contract the
//! presentation layer binds to: open/close/next/prev transitions, signals for
//! each, a "position / total" counter, keyboard handling, and swipe handling.
//! It computes indices and counts; all visual state (showing the overlay,
//! styling, scroll locking) belongs to the embedder.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::model::{Gallery, GalleryItem};
//! use vitrine::widget::Lightbox;
//!
//! let gallery = Arc::new(Gallery::new(vec![
//!     GalleryItem::new("images/reef.jpg", "Coral reef", "nature"),
//!     GalleryItem::new("images/fjord.jpg", "Fjord", "nature"),
//! ]));
//!
//! let mut lightbox = Lightbox::new(gallery);
//! lightbox.opened.connect(|&index| {
//!     println!("Now showing item {}", index);
//! });
//!
//! lightbox.open(0);
//! lightbox.show_next();
//! assert_eq!(lightbox.counter_text().unwrap(), "2 / 2");
//! ```

use std::sync::Arc;

use vitrine_core::Signal;

use crate::model::{CategoryFilter, Gallery, GalleryItem, Navigator};

use super::events::{Key, KeyPressEvent, SwipeDirection};

/// A modal viewer over a gallery with cyclic visible-item navigation.
///
/// # Signals
///
/// - `opened(usize)`: Emitted with the index whenever an item is put on
///   display, including re-opens from wraparound navigation
/// - `closed(())`: Emitted when the viewer closes
/// - `current_changed(i32)`: Emitted with the new index on every transition
///   (-1 on close)
/// - `counter_changed((usize, usize))`: Emitted with `(position, total)`
///   whenever an item is put on display
pub struct Lightbox {
    navigator: Navigator,
    /// Source reference currently on display; cleared on close so the
    /// presentation layer can release the image.
    displayed_source: Option<String>,

    /// Signal emitted when an item is put on display.
    pub opened: Signal<usize>,
    /// Signal emitted when the viewer closes.
    pub closed: Signal<()>,
    /// Signal emitted when the current index changes (-1 on close).
    pub current_changed: Signal<i32>,
    /// Signal emitted with the `(position, total)` counter pair.
    pub counter_changed: Signal<(usize, usize)>,
}

impl Lightbox {
    /// Create a closed lightbox over the given gallery.
    pub fn new(gallery: Arc<Gallery>) -> Self {
        Self {
            navigator: Navigator::new(gallery),
            displayed_source: None,
            opened: Signal::new(),
            closed: Signal::new(),
            current_changed: Signal::new(),
            counter_changed: Signal::new(),
        }
    }

    /// The underlying navigation state.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    // =========================================================================
    // Open / Close
    // =========================================================================

    /// Whether the viewer is open.
    pub fn is_open(&self) -> bool {
        self.navigator.is_open()
    }

    /// The current open index, or -1 while closed.
    pub fn current_index(&self) -> i32 {
        self.navigator.current_index()
    }

    /// The item on display, or `None` while closed.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.navigator.current_item()
    }

    /// The source reference on display; cleared on close.
    pub fn displayed_source(&self) -> Option<&str> {
        self.displayed_source.as_deref()
    }

    /// Open the viewer at `index`.
    ///
    /// Callers are expected to pass a visible index (a card the user could
    /// interact with); no visibility check is applied here. Out-of-range
    /// indices are ignored.
    ///
    /// Returns `true` if an item was put on display.
    pub fn open(&mut self, index: usize) -> bool {
        if self.navigator.open(index).is_none() {
            return false;
        }
        self.finish_open(index);
        true
    }

    /// Close the viewer.
    ///
    /// Clears the displayed source reference and resets the current index.
    /// A no-op while already closed.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.navigator.close();
        self.displayed_source = None;
        tracing::debug!(target: "vitrine::lightbox", "closed");
        self.current_changed.emit(-1);
        self.closed.emit(());
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance to the next visible item, wrapping cyclically.
    ///
    /// A no-op while closed or when nothing is visible. With a single
    /// visible item the same index is re-opened and the signals re-emitted.
    ///
    /// Returns `true` if an item was put on display.
    pub fn show_next(&mut self) -> bool {
        match self.navigator.next() {
            Some(index) => {
                self.finish_open(index);
                true
            }
            None => false,
        }
    }

    /// Step back to the previous visible item, wrapping cyclically.
    ///
    /// Symmetric to [`show_next`](Self::show_next).
    pub fn show_prev(&mut self) -> bool {
        match self.navigator.prev() {
            Some(index) => {
                self.finish_open(index);
                true
            }
            None => false,
        }
    }

    /// Replace the active filter.
    ///
    /// Delegates to the navigator: the open item stays on display even if
    /// the new filter hides it. No signals are emitted; the counter
    /// refreshes on the next transition.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.navigator.set_filter(filter);
    }

    /// Shared transition tail for open/next/prev.
    fn finish_open(&mut self, index: usize) {
        let (source, counter) = {
            // navigator.open/next/prev already validated the index
            let item = self.navigator.current_item();
            let source = item.map(|i| i.source.clone());
            (source, self.navigator.position(index))
        };
        self.displayed_source = source;
        tracing::debug!(
            target: "vitrine::lightbox",
            index,
            position = counter.0,
            total = counter.1,
            "showing item"
        );
        self.current_changed.emit(index as i32);
        self.counter_changed.emit(counter);
        self.opened.emit(index);
    }

    // =========================================================================
    // Counter
    // =========================================================================

    /// The `(position, total)` counter pair for the item on display, or
    /// `None` while closed.
    pub fn counter(&self) -> Option<(usize, usize)> {
        if !self.is_open() {
            return None;
        }
        Some(self.navigator.position(self.navigator.current_index() as usize))
    }

    /// The counter formatted as "position / total", or `None` while closed.
    pub fn counter_text(&self) -> Option<String> {
        self.counter()
            .map(|(position, total)| format!("{position} / {total}"))
    }

    /// The detail line for the item on display ("Category: …"), or `None`
    /// while closed. Uncategorized items show an em dash.
    pub fn detail_text(&self) -> Option<String> {
        self.current_item()
            .map(|item| format!("Category: {}", item.category_label().unwrap_or("—")))
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle a key press.
    ///
    /// While open: ArrowRight advances, ArrowLeft steps back, Escape closes;
    /// these are consumed even when the resulting navigation is a no-op.
    /// While closed, nothing is consumed.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        match event.key {
            Key::ArrowRight => {
                self.show_next();
                true
            }
            Key::ArrowLeft => {
                self.show_prev();
                true
            }
            Key::Escape => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Handle a recognized swipe.
    ///
    /// A leftward swipe advances (the carousel follows the finger), a
    /// rightward swipe steps back; vertical swipes are ignored, as is any
    /// swipe while closed.
    pub fn handle_swipe(&mut self, direction: SwipeDirection) {
        if !self.is_open() {
            return;
        }
        match direction {
            SwipeDirection::Left => {
                self.show_next();
            }
            SwipeDirection::Right => {
                self.show_prev();
            }
            SwipeDirection::Up | SwipeDirection::Down => {}
        }
    }

    // =========================================================================
    // Focus Containment
    // =========================================================================

    /// Minimal focus containment for the modal viewer.
    ///
    /// Given whether the newly focused element lies inside the lightbox,
    /// returns `true` when the embedder must redirect focus back to the
    /// viewer's close control. Always `false` while closed.
    pub fn contain_focus(&self, focus_inside: bool) -> bool {
        self.is_open() && !focus_inside
    }
}
