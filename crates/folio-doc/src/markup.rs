//! Block → markup serialization.
//!
//! One-way, lossy, left-to-right. Each block maps to a fixed markup form and
//! the results are concatenated with no separator:
//!
//! | Kind        | Markup                          |
//! |-------------|---------------------------------|
//! | heading     | `<h2>content</h2>`              |
//! | paragraph   | `<p>content</p>`                |
//! | list        | `<ul><li>content</li></ul>`     |
//! | divider     | `<hr />` (content ignored)      |
//! | image/table | `<p>content</p>` (paragraph)    |
//!
//! Content is inserted verbatim, without escaping. Markup in a block's content
//! passes straight through to the rich-text surface and the preview; this is a
//! known limitation, not a sanitizer.
//!
//! There is no parser in the other direction. Once markup is edited on the
//! free-text surface those edits cannot be turned back into blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Block, BlockKind, DocError, Result};

static TAG: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"<[^>]*>"));

fn tag_pattern() -> Result<&'static Regex> {
    TAG.as_ref().map_err(|e| DocError::Pattern(e.to_string()))
}

/// Render one block, appending to `out`.
pub fn render_block(block: &Block, out: &mut String) -> Result<()> {
    match block.kind() {
        BlockKind::Heading => wrap(out, "h2", &block.content),
        BlockKind::Paragraph => wrap(out, "p", &block.content),
        BlockKind::List => {
            out.push_str("<ul>");
            wrap(out, "li", &block.content);
            out.push_str("</ul>");
        }
        BlockKind::Divider => out.push_str("<hr />"),
        // No dedicated form yet; rendered as plain paragraphs.
        BlockKind::Image | BlockKind::Table => wrap(out, "p", &block.content),
        other => return Err(DocError::UnsupportedBlockKind(other.to_string())),
    }
    Ok(())
}

fn wrap(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Serialize a block sequence to markup. `[]` yields `""`.
pub fn to_markup(blocks: &[Block]) -> Result<String> {
    let mut out = String::with_capacity(blocks.iter().map(|b| b.content.len() + 16).sum());
    for block in blocks {
        render_block(block, &mut out)?;
    }
    Ok(out)
}

/// Remove every `<...>` tag. Entities are left as-is.
pub fn strip_tags(markup: &str) -> Result<String> {
    Ok(tag_pattern()?.replace_all(markup, "").into_owned())
}

/// Plain text for the preview: tags stripped, common entities decoded.
pub fn markup_to_text(markup: &str) -> Result<String> {
    Ok(strip_tags(markup)?
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">"))
}

// ============================================================================
// Tests
// ============================================================================
