//! Preview boundary.
//!
//! The studio hands the renderer three fields: title, markup and author.
//! Pagination, fonts and layout are the renderer's business. [`TextPreview`]
//! is the in-repo renderer: one plain-text page, good enough for the CLI.

use chrono::NaiveDate;
use folio_doc::{BlockDocument, EditorSession, markup_to_text};
use serde::Serialize;

use crate::config::{PageSize, PreviewConfig};
use crate::Result;

/// Everything a renderer receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewRequest {
    pub title: String,
    pub markup: String,
    pub author: String,
}

impl PreviewRequest {
    /// What the free-text surface currently shows.
    pub fn from_session(session: &EditorSession) -> Self {
        let doc = session.document();
        Self {
            title: doc.title().to_string(),
            markup: session.markup().to_string(),
            author: doc.author().to_string(),
        }
    }

    /// Serialized blocks of `doc`.
    pub fn from_document(doc: &BlockDocument) -> Result<Self> {
        Ok(Self {
            title: doc.title().to_string(),
            markup: doc.markup()?,
            author: doc.author().to_string(),
        })
    }
}

/// One rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewPage {
    pub page_size: PageSize,
    pub header: String,
    pub title: String,
    pub body: String,
    pub footer: String,
}

/// Renders a [`PreviewRequest`]; `date` goes in the footer.
pub trait PreviewRenderer {
    fn render(&self, request: &PreviewRequest, date: NaiveDate) -> Result<PreviewPage>;
}

/// Plain-text renderer.
#[derive(Clone, Debug)]
pub struct TextPreview {
    header: String,
    page_size: PageSize,
    width: usize,
}

impl TextPreview {
    pub const DEFAULT_WIDTH: usize = 72;

    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            header: config.header.clone(),
            page_size: config.page_size,
            width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Lay a page out as text: header, centered title, body, footer.
    pub fn to_text(&self, page: &PreviewPage) -> String {
        let rule = "-".repeat(self.width);
        format!(
            "{}\n{rule}\n\n{}\n\n{}\n\n{rule}\n{}\n",
            page.header,
            center(&page.title, self.width),
            page.body,
            center(&page.footer, self.width),
        )
    }
}

impl Default for TextPreview {
    fn default() -> Self {
        Self::new(&PreviewConfig::default())
    }
}

impl PreviewRenderer for TextPreview {
    fn render(&self, request: &PreviewRequest, date: NaiveDate) -> Result<PreviewPage> {
        Ok(PreviewPage {
            page_size: self.page_size,
            header: self.header.clone(),
            title: request.title.clone(),
            body: markup_to_text(&request.markup)?,
            footer: format!("Created by {} | {}", request.author, date.format("%-m/%-d/%Y")),
        })
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{text}", " ".repeat((width - len) / 2))
}
