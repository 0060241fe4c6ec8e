//! Document metadata and templates.
//!
//! Metadata (title, author) lives beside the block sequence, not inside it.
//! Templates are immutable fixture records; applying one is the editor's job.

use serde::{Deserialize, Serialize};

/// Title shown before any template is chosen.
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// Author shown before the user fills it in.
pub const DEFAULT_AUTHOR: &str = "Your Name";

/// Independently mutable document metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    pub author: String,
}

impl DocumentMeta {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_AUTHOR)
    }
}

/// Immutable starting point for a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Stable slug (`"blank"`, `"ebook"`, ...).
    pub id: String,
    /// Display name; becomes the document title when applied.
    pub name: String,
    pub description: String,
    /// Asset path of the gallery thumbnail.
    pub thumbnail: String,
    /// Seed markup handed to the free-text surface.
    pub seed_markup: String,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        seed_markup: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let thumbnail = format!("/templates/{id}.png");
        Self {
            id,
            name: name.into(),
            description: description.into(),
            thumbnail,
            seed_markup: seed_markup.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_meta() {
        let meta = DocumentMeta::default();
        assert_eq!(meta.title, "Untitled Document");
        assert_eq!(meta.author, "Your Name");
    }

    #[test]
    fn test_template_thumbnail_from_id() {
        let t = Template::new("ebook", "E-book", "chapters", "<h1>x</h1>");
        assert_eq!(t.thumbnail, "/templates/ebook.png");
    }
}
