//! Gallery item type.

use serde::{Deserialize, Serialize};

/// A single entry in a gallery.
///
/// Items are identified by their position in the gallery's fixed sequence;
/// the item itself carries only display metadata. The source reference and
/// caption are opaque to navigation; only the category participates in
/// filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Reference to the full-size image (URL or path). Opaque to the kit;
    /// passed through to the presentation layer and the download action.
    pub source: String,
    /// Human-readable caption, also the basis for download filenames.
    #[serde(default)]
    pub caption: String,
    /// Category label used by filtering. `None` means uncategorized, which
    /// only the "all" filter matches.
    #[serde(default)]
    pub category: Option<String>,
}

impl GalleryItem {
    /// Create an item with a source, caption, and category.
    pub fn new(
        source: impl Into<String>,
        caption: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
            category: Some(category.into()),
        }
    }

    /// Create an item without a category.
    pub fn uncategorized(source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
            category: None,
        }
    }

    /// The category label, or `None` for uncategorized items.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_fields_deserialize() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"source": "images/dunes.jpg", "caption": "Dunes at dawn", "category": "landscape"}"#,
        )
        .unwrap();

        assert_eq!(item.source, "images/dunes.jpg");
        assert_eq!(item.caption, "Dunes at dawn");
        assert_eq!(item.category_label(), Some("landscape"));
    }

    #[test]
    fn test_caption_and_category_are_optional() {
        let item: GalleryItem = serde_json::from_str(r#"{"source": "images/untitled.jpg"}"#).unwrap();

        assert_eq!(item.caption, "");
        assert_eq!(item.category_label(), None);
    }
}
