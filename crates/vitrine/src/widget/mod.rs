//! Widget layer for Vitrine.
//!
//! The widgets here are headless: they compute indices, visibility flags,
//! and counter values and emit signals, while the embedding application owns
//! every pixel. Input arrives as the event types in [`events`], translated
//! by the embedder from its windowing toolkit.
//!
//! # Overview
//!
//! - [`GalleryView`]: The card grid with filter pills, owning the lightbox
//! - [`Lightbox`]: The modal viewer with cyclic keyboard/touch navigation
//! - [`SwipeRecognizer`]: Turns raw touch points into swipe directions
//!
//! # Wiring Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::model::{CategoryFilter, Gallery, GalleryItem};
//! use vitrine::widget::{GalleryView, Key, KeyPressEvent};
//!
//! let gallery = Arc::new(Gallery::new(vec![
//!     GalleryItem::new("a.jpg", "Alpine lake", "nature"),
//!     GalleryItem::new("b.jpg", "Night market", "travel"),
//!     GalleryItem::new("c.jpg", "Tidepool", "nature"),
//! ]));
//! let mut view = GalleryView::new(gallery);
//!
//! // Card click
//! view.activate_card(0);
//!
//! // Keyboard: ArrowRight goes to the next visible card
//! view.set_filter(CategoryFilter::category("nature"));
//! view.lightbox_mut().handle_key(&KeyPressEvent::new(Key::ArrowRight));
//! assert_eq!(view.lightbox().current_index(), 2);
//! ```

pub mod events;
mod gallery_view;
pub mod gesture;
mod geometry;
mod lightbox;

pub use events::{
    Key, KeyPressEvent, KeyboardModifiers, SwipeDirection, TouchPhase, TouchPoint,
};
pub use gallery_view::GalleryView;
pub use gesture::{DEFAULT_SWIPE_MIN_DISTANCE, SwipeRecognizer};
pub use geometry::Point;
pub use lightbox::Lightbox;
