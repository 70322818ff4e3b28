//! Vitrine - a headless image gallery and lightbox widget kit.
//!
//! Vitrine computes gallery state (category filtering, cyclic visible-item
//! navigation, "position / total" counters) and notifies the presentation
//! layer through signals. It renders nothing: the embedding application owns
//! all visual state and feeds input events in.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::model::{CategoryFilter, Gallery, GalleryItem};
//! use vitrine::widget::GalleryView;
//!
//! let gallery = Arc::new(Gallery::new(vec![
//!     GalleryItem::new("images/reef.jpg", "Coral reef", "nature"),
//!     GalleryItem::new("images/plaza.jpg", "Old town plaza", "travel"),
//!     GalleryItem::new("images/fjord.jpg", "Fjord", "nature"),
//! ]));
//!
//! let mut view = GalleryView::new(gallery);
//! view.set_filter(CategoryFilter::category("nature"));
//!
//! view.activate_card(0);
//! view.lightbox_mut().show_next();
//! assert_eq!(view.lightbox().counter_text().unwrap(), "2 / 2");
//! ```

pub mod model;
pub mod widget;

pub use vitrine_core::{ConnectionGuard, ConnectionId, Signal};
