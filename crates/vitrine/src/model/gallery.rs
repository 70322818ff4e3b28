//! The fixed, ordered item sequence backing a gallery.

use std::fmt;

use serde::Deserialize;

use super::item::GalleryItem;

/// An ordered, immutable sequence of gallery items.
///
/// The sequence is fixed at construction: items are addressed by their
/// stable index `0..len()` for the lifetime of the gallery. There is no
/// insertion or removal, since navigation state elsewhere relies on indices
/// never shifting.
///
/// # Example
///
/// ```
/// use vitrine::model::{Gallery, GalleryItem};
///
/// let gallery = Gallery::new(vec![
///     GalleryItem::new("images/reef.jpg", "Coral reef", "nature"),
///     GalleryItem::new("images/plaza.jpg", "Old town plaza", "travel"),
/// ]);
///
/// assert_eq!(gallery.len(), 2);
/// assert_eq!(gallery.get(1).unwrap().caption, "Old town plaza");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Create a gallery from an ordered list of items.
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    /// Load a gallery from a JSON manifest.
    ///
    /// The manifest is an array of items:
    ///
    /// ```json
    /// [
    ///   { "source": "images/reef.jpg", "caption": "Coral reef", "category": "nature" },
    ///   { "source": "images/plaza.jpg", "caption": "Old town plaza" }
    /// ]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let items: Vec<GalleryItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// The number of items in the gallery.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the gallery has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Iterate over the items in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    /// Distinct category labels in first-appearance order.
    ///
    /// This is the label set a presentation layer turns into filter pills.
    /// Uncategorized items contribute no label.
    pub fn categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for item in &self.items {
            if let Some(label) = item.category_label()
                && !labels.contains(&label)
            {
                labels.push(label);
            }
        }
        labels
    }
}

/// Errors from loading a gallery manifest.
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest was not valid JSON or did not match the item schema.
    Parse(String),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Failed to parse gallery manifest: {msg}"),
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

// Deserialize directly into a Gallery so manifests can also be embedded in
// larger configuration documents.
impl<'de> Deserialize<'de> for Gallery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<GalleryItem>::deserialize(deserializer)?;
        Ok(Self::new(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gallery {
        Gallery::new(vec![
            GalleryItem::new("a.jpg", "A", "nature"),
            GalleryItem::new("b.jpg", "B", "travel"),
            GalleryItem::new("c.jpg", "C", "nature"),
            GalleryItem::uncategorized("d.jpg", "D"),
        ])
    }

    #[test]
    fn test_indices_are_stable() {
        let gallery = sample();
        assert_eq!(gallery.len(), 4);
        assert_eq!(gallery.get(0).unwrap().caption, "A");
        assert_eq!(gallery.get(3).unwrap().caption, "D");
        assert!(gallery.get(4).is_none());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let gallery = sample();
        assert_eq!(gallery.categories(), vec!["nature", "travel"]);
    }

    #[test]
    fn test_from_json_manifest() {
        let gallery = Gallery::from_json(
            r#"[
                { "source": "images/reef.jpg", "caption": "Coral reef", "category": "nature" },
                { "source": "images/plaza.jpg", "caption": "Old town plaza" }
            ]"#,
        )
        .unwrap();

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.get(0).unwrap().category_label(), Some("nature"));
        assert_eq!(gallery.get(1).unwrap().category_label(), None);
    }

    #[test]
    fn test_from_json_rejects_bad_manifest() {
        let err = Gallery::from_json(r#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = Gallery::new(Vec::new());
        assert!(gallery.is_empty());
        assert!(gallery.categories().is_empty());
    }
}
