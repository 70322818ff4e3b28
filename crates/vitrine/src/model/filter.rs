//! Category filter predicate.

use std::fmt;

use super::item::GalleryItem;

/// The single category constraint applied to a gallery.
///
/// A filter is either [`All`](CategoryFilter::All), matching every item, or a
/// specific category label. Uncategorized items are matched only by `All`.
///
/// # Example
///
/// ```
/// use vitrine::model::{CategoryFilter, GalleryItem};
///
/// let portrait = GalleryItem::new("p.jpg", "Portrait", "people");
/// assert!(CategoryFilter::All.matches(&portrait));
/// assert!(CategoryFilter::category("people").matches(&portrait));
/// assert!(!CategoryFilter::category("landscape").matches(&portrait));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every item.
    #[default]
    All,
    /// Match items whose category equals this label.
    Category(String),
}

impl CategoryFilter {
    /// Create a filter for a specific category label.
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category(label.into())
    }

    /// The visibility predicate: `true` if the item passes this filter.
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => item.category_label() == Some(label.as_str()),
        }
    }

    /// Whether this is the "all" filter.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Category(label) => write!(f, "{label}"),
        }
    }
}
