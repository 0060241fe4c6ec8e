//! Block types for the structured editor.
//!
//! A document is an ordered sequence of [`Block`]s. Order is the only
//! structural relationship; there is no nesting and no parent/child edge.
//!
//! ## Design: identity vs content
//!
//! A block's identity is its [`BlockId`], minted once at construction.
//! `PartialEq`/`Hash` look only at the ID, so editing content never changes
//! which block you are holding. Use [`Block::same_content`] when you need to
//! compare payloads as well.
//!
//! `kind` is fixed at construction; there is no kind migration. To turn a
//! paragraph into a heading, remove it and add a new block.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::ids::BlockId;

/// What a block *is*.
///
/// Marked `#[non_exhaustive]` so downstream renderers must carry a fallback
/// arm; the markup serializer turns that arm into an explicit error instead
/// of silently rendering an unknown kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum BlockKind {
    /// Section heading.
    Heading,
    /// Body text.
    #[default]
    Paragraph,
    /// Image; content is a URI.
    Image,
    /// Bulleted list; content is the single item's text.
    List,
    /// Table; content is free-form cell text.
    Table,
    /// Horizontal rule; content is ignored.
    #[strum(serialize = "divider", serialize = "hr")]
    Divider,
}

impl BlockKind {
    /// Palette order for the "add block" controls.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::List,
        BlockKind::Table,
        BlockKind::Divider,
    ];

    /// Parse from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Divider => "divider",
        }
    }

    /// Human label for the add-block palette.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Heading => "Heading",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Image => "Image",
            BlockKind::List => "List",
            BlockKind::Table => "Table",
            BlockKind::Divider => "Divider",
        }
    }

    /// Placeholder content for a block freshly added from the palette.
    pub fn default_content(&self) -> &'static str {
        match self {
            BlockKind::Heading => "New heading",
            BlockKind::Paragraph => "New paragraph",
            BlockKind::Image => "",
            BlockKind::List => "List item",
            BlockKind::Table => "Table",
            BlockKind::Divider => "",
        }
    }

    /// Whether `content` carries meaning for this kind.
    pub fn has_content(&self) -> bool {
        !matches!(self, BlockKind::Divider)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single structured content unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    kind: BlockKind,
    /// Text payload; interpretation depends on `kind` (image: a URI).
    pub content: String,
}

impl Block {
    /// Create a block with a freshly minted ID.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: content.into(),
        }
    }

    /// Create a block carrying the palette placeholder for `kind`.
    pub fn placeholder(kind: BlockKind) -> Self {
        Self::new(kind, kind.default_content())
    }

    /// Shorthand for a heading block.
    pub fn heading(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading, content)
    }

    /// Shorthand for a paragraph block.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, content)
    }

    /// Shorthand for a divider block.
    pub fn divider() -> Self {
        Self::new(BlockKind::Divider, "")
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Replace the content, keeping the ID.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Compare kind and content as well as identity.
    pub fn same_content(&self, other: &Block) -> bool {
        self.id == other.id && self.kind == other.kind && self.content == other.content
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Block {}

impl std::hash::Hash for Block {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_str() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_parse_case_insensitive_and_alias() {
        assert_eq!(BlockKind::from_str("HEADING"), Some(BlockKind::Heading));
        assert_eq!(BlockKind::from_str("hr"), Some(BlockKind::Divider));
        assert_eq!(BlockKind::from_str("quote"), None);
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&BlockKind::Divider).unwrap();
        assert_eq!(json, "\"divider\"");
    }

    #[test]
    fn test_new_blocks_get_distinct_ids() {
        let a = Block::paragraph("same");
        let b = Block::paragraph("same");
        assert_ne!(a, b);
        assert!(!a.same_content(&b));
    }

    #[test]
    fn test_content_edit_preserves_identity() {
        let mut block = Block::heading("Title");
        let before = block.clone();
        block.set_content("Renamed");
        assert_eq!(block, before);
        assert_eq!(block.id(), before.id());
        assert!(!block.same_content(&before));
        assert_eq!(block.kind(), BlockKind::Heading);
    }

    #[test]
    fn test_placeholder_content() {
        assert_eq!(Block::placeholder(BlockKind::List).content, "List item");
        assert_eq!(Block::placeholder(BlockKind::Divider).content, "");
        assert!(!BlockKind::Divider.has_content());
    }

    #[test]
    fn test_block_json_roundtrip_keeps_id() {
        let block = Block::new(BlockKind::Image, "https://example.com/cover.png");
        let json = serde_json::to_string(&block).unwrap();
        let parsed: Block = serde_json::from_str(&json).unwrap();
        assert!(parsed.same_content(&block));
    }
}
