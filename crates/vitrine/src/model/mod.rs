//! Gallery data model for Vitrine.
//!
//! This module separates data representation from display logic: a
//! [`Gallery`] is the fixed, ordered item sequence; a [`CategoryFilter`] is
//! the visibility predicate over it; a [`Navigator`] is the transient
//! navigation state (current open index + active filter) that the widget
//! layer drives.
//!
//! # Core Types
//!
//! - [`GalleryItem`]: Source reference, caption, and optional category
//! - [`Gallery`]: Immutable ordered sequence with stable indices
//! - [`CategoryFilter`]: "all" or one specific category label
//! - [`Navigator`]: Open/close/next/prev transitions and counter queries
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::model::{CategoryFilter, Gallery, Navigator};
//!
//! let gallery = Arc::new(Gallery::from_json(r#"[
//!     { "source": "images/reef.jpg", "caption": "Coral reef", "category": "nature" },
//!     { "source": "images/plaza.jpg", "caption": "Old town plaza", "category": "travel" },
//!     { "source": "images/fjord.jpg", "caption": "Fjord", "category": "nature" }
//! ]"#).unwrap());
//!
//! let mut nav = Navigator::new(gallery);
//! nav.set_filter(CategoryFilter::category("nature"));
//! nav.open(0);
//! assert_eq!(nav.next(), Some(2));
//! assert_eq!(nav.position(2), (2, 2));
//! ```

mod filter;
mod gallery;
mod item;
mod navigator;

pub use filter::CategoryFilter;
pub use gallery::{Gallery, ManifestError};
pub use item::GalleryItem;
pub use navigator::Navigator;
