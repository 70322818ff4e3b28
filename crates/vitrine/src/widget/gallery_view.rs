//! Gallery view: cards, filter pills, and lightbox wiring.
//!
//! [`GalleryView`] is the outer widget the embedder drives: card activation
//! opens the lightbox, filter pills change the shared filter, and per-card
//! visibility flags tell the presentation layer which cards to show. The
//! view never styles anything itself.

use std::sync::Arc;

use vitrine_core::Signal;

use crate::model::{CategoryFilter, Gallery};

use super::events::KeyPressEvent;
use super::lightbox::Lightbox;

/// A gallery of cards with category filter pills and a modal lightbox.
///
/// # Signals
///
/// - `filter_changed(CategoryFilter)`: Emitted when a pill activates a new
///   filter; the embedder re-reads card visibility in response
/// - `preload_requested(String)`: Emitted with a source reference when a
///   card is hovered, so the embedder can warm the image cache
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vitrine::model::{CategoryFilter, Gallery, GalleryItem};
/// use vitrine::widget::GalleryView;
///
/// let gallery = Arc::new(Gallery::new(vec![
///     GalleryItem::new("a.jpg", "Alpine lake", "nature"),
///     GalleryItem::new("b.jpg", "Night market", "travel"),
/// ]));
///
/// let mut view = GalleryView::new(gallery);
/// view.set_filter(CategoryFilter::category("travel"));
/// assert_eq!(view.visible_cards(), vec![1]);
///
/// view.activate_card(1);
/// assert!(view.lightbox().is_open());
/// ```
pub struct GalleryView {
    gallery: Arc<Gallery>,
    lightbox: Lightbox,

    /// Signal emitted when the active filter changes.
    pub filter_changed: Signal<CategoryFilter>,
    /// Signal emitted with a source reference when a card is hovered.
    pub preload_requested: Signal<String>,
}

impl GalleryView {
    /// Create a view over the given gallery with the "all" filter active.
    pub fn new(gallery: Arc<Gallery>) -> Self {
        let lightbox = Lightbox::new(gallery.clone());
        Self {
            gallery,
            lightbox,
            filter_changed: Signal::new(),
            preload_requested: Signal::new(),
        }
    }

    /// The gallery backing this view.
    pub fn gallery(&self) -> &Arc<Gallery> {
        &self.gallery
    }

    /// The modal lightbox viewer.
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Mutable access to the lightbox, for routing input events.
    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Activate the card at `index` (click), opening the lightbox there.
    ///
    /// Returns `true` if the lightbox opened.
    pub fn activate_card(&mut self, index: usize) -> bool {
        self.lightbox.open(index)
    }

    /// Handle a key press delivered to the focused card at `index`.
    ///
    /// Enter and Space activate the card. Returns whether the event was
    /// consumed.
    pub fn handle_card_key(&mut self, index: usize, event: &KeyPressEvent) -> bool {
        if event.key.is_activation() {
            self.activate_card(index);
            true
        } else {
            false
        }
    }

    /// Report a pointer entering the card at `index`.
    ///
    /// Emits `preload_requested` with the card's source reference so the
    /// embedder can fetch the full image before the card is activated.
    pub fn hover_card(&self, index: usize) {
        if let Some(item) = self.gallery.get(index) {
            self.preload_requested.emit(item.source.clone());
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// The active filter.
    pub fn filter(&self) -> &CategoryFilter {
        self.lightbox.navigator().filter()
    }

    /// Distinct category labels for the filter pill row, in
    /// first-appearance order.
    pub fn pill_labels(&self) -> Vec<&str> {
        self.gallery.categories()
    }

    /// Activate a filter pill.
    ///
    /// Updates the shared filter and emits `filter_changed`. The lightbox,
    /// if open, is left alone: an open item hidden by the new filter stays
    /// on display until the user navigates or closes.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.lightbox.set_filter(filter.clone());
        self.filter_changed.emit(filter);
    }

    /// Whether the card at `index` is visible under the active filter.
    pub fn card_visible(&self, index: usize) -> bool {
        self.lightbox.navigator().is_visible(index)
    }

    /// Indices of all visible cards, in sequence order.
    pub fn visible_cards(&self) -> Vec<usize> {
        self.lightbox.navigator().visible_indices()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::model::GalleryItem;
    use crate::widget::events::Key;

    fn view() -> GalleryView {
        GalleryView::new(Arc::new(Gallery::new(vec![
            GalleryItem::new("a.jpg", "Alpine lake", "nature"),
            GalleryItem::new("b.jpg", "Night market", "travel"),
            GalleryItem::new("c.jpg", "Tidepool", "nature"),
            GalleryItem::uncategorized("d.jpg", "Untitled"),
        ])))
    }

    #[test]
    fn test_activate_card_opens_lightbox() {
        let mut view = view();
        assert!(view.activate_card(2));
        assert_eq!(view.lightbox().current_index(), 2);
        assert!(!view.activate_card(9));
    }

    #[test]
    fn test_card_keys_activate() {
        let mut view = view();

        assert!(view.handle_card_key(1, &KeyPressEvent::new(Key::Enter)));
        assert_eq!(view.lightbox().current_index(), 1);

        view.lightbox_mut().close();
        assert!(view.handle_card_key(0, &KeyPressEvent::new(Key::Space)));
        assert_eq!(view.lightbox().current_index(), 0);

        assert!(!view.handle_card_key(2, &KeyPressEvent::new(Key::Tab)));
    }

    #[test]
    fn test_set_filter_updates_visibility_and_emits() {
        let mut view = view();
        let emitted = Arc::new(Mutex::new(None));
        let emitted_clone = emitted.clone();
        view.filter_changed.connect(move |filter: &CategoryFilter| {
            *emitted_clone.lock() = Some(filter.clone());
        });

        view.set_filter(CategoryFilter::category("nature"));

        assert_eq!(view.visible_cards(), vec![0, 2]);
        assert!(view.card_visible(0));
        assert!(!view.card_visible(1));
        assert!(!view.card_visible(3));
        assert_eq!(
            *emitted.lock(),
            Some(CategoryFilter::category("nature"))
        );
    }

    #[test]
    fn test_filter_change_leaves_lightbox_alone() {
        let mut view = view();
        view.activate_card(1);
        view.set_filter(CategoryFilter::category("nature"));

        assert!(view.lightbox().is_open());
        assert_eq!(view.lightbox().current_index(), 1);
    }

    #[test]
    fn test_pill_labels() {
        let view = view();
        assert_eq!(view.pill_labels(), vec!["nature", "travel"]);
    }

    #[test]
    fn test_hover_requests_preload() {
        let view = view();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let requests_clone = requests.clone();
        view.preload_requested.connect(move |source: &String| {
            requests_clone.lock().push(source.clone());
        });

        view.hover_card(0);
        view.hover_card(9); // out of range, ignored

        assert_eq!(*requests.lock(), vec!["a.jpg".to_string()]);
    }

    #[test]
    fn test_all_filter_shows_everything() {
        let mut view = view();
        view.set_filter(CategoryFilter::category("travel"));
        view.set_filter(CategoryFilter::All);
        assert_eq!(view.visible_cards(), vec![0, 1, 2, 3]);
    }
}
