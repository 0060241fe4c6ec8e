//! Rich-text surface boundary.
//!
//! The surface receives an initial markup string and reports its whole
//! content on every edit. The studio never parses what comes back.

/// A free-text editing widget.
pub trait RichTextSurface {
    /// Replace the widget content.
    fn load(&mut self, markup: &str);

    /// Current content, as reported to the change callback.
    fn content(&self) -> &str;
}

/// Headless surface: a markup string plus an edit counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupBuffer {
    content: String,
    edits: usize,
}

impl MarkupBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content as if the user retyped everything.
    pub fn replace(&mut self, markup: impl Into<String>) {
        self.content = markup.into();
        self.edits += 1;
    }

    /// Append raw markup at the end.
    pub fn append(&mut self, markup: &str) {
        self.content.push_str(markup);
        self.edits += 1;
    }

    /// Edits since the last [`load`](RichTextSurface::load).
    pub fn edits(&self) -> usize {
        self.edits
    }
}

impl RichTextSurface for MarkupBuffer {
    fn load(&mut self, markup: &str) {
        self.content.clear();
        self.content.push_str(markup);
        self.edits = 0;
    }

    fn content(&self) -> &str {
        &self.content
    }
}
