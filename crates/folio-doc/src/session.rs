//! Editing mode coordination.
//!
//! An [`EditorSession`] owns one document and decides which editing surface
//! is authoritative:
//!
//! ```text
//!                 apply_template
//! TemplateSelection ───────────► StructuredEditing ◄──┐
//!                                   │                 │ switch_surface(Structured)
//!                                   │ switch_surface  │ (free-text edits forfeited)
//!                                   ▼ (FreeText)      │
//!                                FreeTextEditing ─────┘
//! ```
//!
//! Applying a template hands its seed markup to the free-text surface as-is;
//! the two starter blocks are only a flattened reading of it. From then on
//! every structural mutation re-derives the markup from the blocks, so the
//! free-text surface shows the latest blocks when it is next opened. Markup
//! edited on the free-text surface is kept as opaque text; it is never
//! parsed back into blocks.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::document::BlockDocument;
use crate::markup::to_markup;
use crate::reorder::DropResult;
use crate::{BlockId, BlockKind, DocError, DocumentMeta, Result, Template};

/// Free-text content shown before any template is chosen.
pub const INITIAL_MARKUP: &str = "<p>Start editing your document...</p>";

/// Which editing surface is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    Structured,
    FreeText,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Structured => "structured",
            Surface::FreeText => "free-text",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EditorPhase {
    #[default]
    TemplateSelection,
    StructuredEditing,
    FreeTextEditing,
}

impl EditorPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorPhase::TemplateSelection => "template-selection",
            EditorPhase::StructuredEditing => "structured-editing",
            EditorPhase::FreeTextEditing => "free-text-editing",
        }
    }

    /// The active surface, once a template has been chosen.
    pub fn surface(&self) -> Option<Surface> {
        match self {
            EditorPhase::TemplateSelection => None,
            EditorPhase::StructuredEditing => Some(Surface::Structured),
            EditorPhase::FreeTextEditing => Some(Surface::FreeText),
        }
    }
}

impl std::fmt::Display for EditorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a surface switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub surface: Surface,
    /// False when the requested surface was already active.
    pub changed: bool,
    /// True when free-text edits made since the last sync were dropped.
    pub discarded_free_text: bool,
}

/// One user's editing session over one document.
#[derive(Clone, Debug)]
pub struct EditorSession {
    document: BlockDocument,
    phase: EditorPhase,
    markup: String,
    /// Markup as last produced by the structured side (template seed or
    /// serialized blocks). Discarded free-text edits fall back to this.
    synced_markup: String,
    /// Free-text edits not reflected in the blocks.
    free_text_dirty: bool,
    template_id: Option<String>,
}

impl EditorSession {
    pub fn new(meta: DocumentMeta) -> Self {
        Self {
            document: BlockDocument::starter(meta),
            phase: EditorPhase::TemplateSelection,
            markup: INITIAL_MARKUP.to_string(),
            synced_markup: INITIAL_MARKUP.to_string(),
            free_text_dirty: false,
            template_id: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn document(&self) -> &BlockDocument {
        &self.document
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn surface(&self) -> Option<Surface> {
        self.phase.surface()
    }

    /// Current content of the free-text surface.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Whether free-text edits exist that the blocks do not reflect.
    pub fn has_unsynced_free_text(&self) -> bool {
        self.free_text_dirty
    }

    /// ID of the template last applied, if any.
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    // =========================================================================
    // Template and surface transitions
    // =========================================================================

    /// Replace the document with a template's initial state.
    ///
    /// Allowed from every phase; always lands on the structured surface.
    pub fn apply_template(&mut self, template: &Template) -> Result<()> {
        self.document.apply_template(template)?;
        self.synced_markup = template.seed_markup.clone();
        self.markup = self.synced_markup.clone();
        if self.free_text_dirty {
            warn!(template = %template.id, "template applied over unsynced free-text edits");
        }
        self.free_text_dirty = false;
        self.phase = EditorPhase::StructuredEditing;
        self.template_id = Some(template.id.clone());
        info!(template = %template.id, title = %self.document.title(), "template applied");
        Ok(())
    }

    /// Show the other editing surface.
    pub fn switch_surface(&mut self, to: Surface) -> Result<SwitchOutcome> {
        let Some(current) = self.phase.surface() else {
            return Err(DocError::WrongPhase {
                operation: "switch_surface",
                phase: self.phase.as_str(),
            });
        };
        if current == to {
            return Ok(SwitchOutcome {
                surface: to,
                changed: false,
                discarded_free_text: false,
            });
        }

        let discarded_free_text = match to {
            Surface::FreeText => {
                self.phase = EditorPhase::FreeTextEditing;
                false
            }
            Surface::Structured => {
                let discarded = self.free_text_dirty;
                if discarded {
                    warn!(
                        document = %self.document.id(),
                        "free-text edits are not carried back into blocks; discarding"
                    );
                    self.markup = self.synced_markup.clone();
                    self.free_text_dirty = false;
                }
                self.phase = EditorPhase::StructuredEditing;
                discarded
            }
        };
        info!(surface = %to, "switched editing surface");
        Ok(SwitchOutcome {
            surface: to,
            changed: true,
            discarded_free_text,
        })
    }

    /// Change callback of the rich-text surface. The payload is opaque.
    pub fn free_text_changed(&mut self, markup: impl Into<String>) -> Result<()> {
        if self.phase != EditorPhase::FreeTextEditing {
            return Err(self.not_on("free_text_changed", Surface::FreeText));
        }
        self.markup = markup.into();
        self.free_text_dirty = true;
        Ok(())
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.set_title(title);
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.document.set_author(author);
    }

    // =========================================================================
    // Structural mutations (structured surface only)
    // =========================================================================

    /// Append a palette block with its placeholder content.
    pub fn add_block(&mut self, kind: BlockKind) -> Result<BlockId> {
        self.add_block_with(kind, kind.default_content())
    }

    /// Append a block with explicit content.
    pub fn add_block_with(&mut self, kind: BlockKind, content: impl Into<String>) -> Result<BlockId> {
        self.require_structured("add_block")?;
        let id = self.document.push_block(kind, content);
        self.sync_markup()?;
        Ok(id)
    }

    pub fn remove_block(&mut self, id: &BlockId) -> Result<()> {
        self.require_structured("remove_block")?;
        self.document.remove_block(id)?;
        self.sync_markup()
    }

    pub fn edit_block(&mut self, id: &BlockId, content: impl Into<String>) -> Result<()> {
        self.require_structured("edit_block")?;
        self.document.edit_block(id, content)?;
        self.sync_markup()
    }

    /// Returns `true` if the order changed.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> Result<bool> {
        self.require_structured("reorder")?;
        let changed = self.document.reorder(source, destination)?;
        if changed {
            self.sync_markup()?;
        }
        Ok(changed)
    }

    /// Apply a drag-and-drop release from the structured surface.
    pub fn apply_drop(&mut self, drop: DropResult) -> Result<bool> {
        self.reorder(drop.source, drop.destination)
    }

    fn sync_markup(&mut self) -> Result<()> {
        self.synced_markup = to_markup(self.document.blocks())?;
        self.markup = self.synced_markup.clone();
        self.free_text_dirty = false;
        Ok(())
    }

    fn require_structured(&self, operation: &'static str) -> Result<()> {
        match self.phase {
            EditorPhase::StructuredEditing => Ok(()),
            _ => Err(self.not_on(operation, Surface::Structured)),
        }
    }

    fn not_on(&self, operation: &'static str, wanted: Surface) -> DocError {
        match self.phase.surface() {
            Some(surface) if surface != wanted => DocError::WrongSurface {
                operation,
                surface: surface.as_str(),
            },
            _ => DocError::WrongPhase {
                operation,
                phase: self.phase.as_str(),
            },
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(DocumentMeta::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemplateCatalog;
    use pretty_assertions::assert_eq;

    fn started(template: &str) -> EditorSession {
        let catalog = TemplateCatalog::builtin();
        let mut session = EditorSession::default();
        session.apply_template(catalog.get(template).unwrap()).unwrap();
        session
    }

    #[test]
    fn test_initial_state() {
        let session = EditorSession::default();
        assert_eq!(session.phase(), EditorPhase::TemplateSelection);
        assert_eq!(session.surface(), None);
        assert_eq!(session.markup(), INITIAL_MARKUP);
        assert_eq!(session.document().title(), "Untitled Document");
        assert_eq!(session.document().len(), 2);
    }

    #[test]
    fn test_mutations_rejected_before_template() {
        let mut session = EditorSession::default();
        assert_eq!(
            session.add_block(BlockKind::Paragraph).unwrap_err(),
            DocError::WrongPhase {
                operation: "add_block",
                phase: "template-selection"
            }
        );
        assert!(session.switch_surface(Surface::FreeText).is_err());
        assert!(session.free_text_changed("<p>x</p>").is_err());
    }

    #[test]
    fn test_apply_template_enters_structured_editing() {
        let session = started("report");
        assert_eq!(session.phase(), EditorPhase::StructuredEditing);
        assert_eq!(session.template_id(), Some("report"));
        assert_eq!(session.document().title(), "Market Report");
        assert_eq!(
            session.markup(),
            "<h1>Market Analysis Report</h1><h2>Executive Summary</h2><p>This report analyzes the current trends in...</p>"
        );
    }

    #[test]
    fn test_template_seed_reaches_free_text_surface() {
        let mut session = started("checklist");
        let seed = "<h1>My Checklist</h1><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>";
        assert_eq!(session.markup(), seed);
        session.switch_surface(Surface::FreeText).unwrap();
        assert_eq!(session.markup(), seed);
        session.switch_surface(Surface::Structured).unwrap();
        assert_eq!(session.markup(), seed);

        session.add_block(BlockKind::Divider).unwrap();
        assert_eq!(
            session.markup(),
            "<h2>Checklist</h2><p>My ChecklistItem 1Item 2Item 3</p><hr />"
        );
    }

    #[test]
    fn test_structural_mutations_resync_markup() {
        let mut session = started("blank");
        let id = session.add_block(BlockKind::Divider).unwrap();
        assert!(session.markup().ends_with("<hr />"));

        session.reorder(2, Some(0)).unwrap();
        assert!(session.markup().starts_with("<hr />"));

        session.remove_block(&id).unwrap();
        assert_eq!(
            session.markup(),
            "<h2>Blank Document</h2><p>My DocumentStart typing here...</p>"
        );

        let heading = session.document().blocks()[0].id();
        session.edit_block(&heading, "Renamed").unwrap();
        assert!(session.markup().starts_with("<h2>Renamed</h2>"));
    }

    #[test]
    fn test_noop_reorder_keeps_markup() {
        let mut session = started("guide");
        let before = session.markup().to_string();
        assert!(!session.apply_drop(DropResult::new(0, None)).unwrap());
        assert_eq!(session.markup(), before);
    }

    #[test]
    fn test_free_text_surface_blocks_structural_edits() {
        let mut session = started("blank");
        let outcome = session.switch_surface(Surface::FreeText).unwrap();
        assert!(outcome.changed);
        assert_eq!(
            session.add_block(BlockKind::List).unwrap_err(),
            DocError::WrongSurface {
                operation: "add_block",
                surface: "free-text"
            }
        );
        assert!(!session.switch_surface(Surface::FreeText).unwrap().changed);
    }

    #[test]
    fn test_free_text_edits_are_discarded_on_switch_back() {
        let mut session = started("blank");
        session.switch_surface(Surface::FreeText).unwrap();
        session.free_text_changed("<p>typed by hand</p>").unwrap();
        assert!(session.has_unsynced_free_text());
        assert_eq!(session.markup(), "<p>typed by hand</p>");

        let outcome = session.switch_surface(Surface::Structured).unwrap();
        assert!(outcome.discarded_free_text);
        assert!(!session.has_unsynced_free_text());
        assert_eq!(session.document().len(), 2);
        assert_eq!(session.markup(), "<h1>My Document</h1><p>Start typing here...</p>");

        session.switch_surface(Surface::FreeText).unwrap();
        session.free_text_changed("<p>again</p>").unwrap();
        let heading = session.document().blocks()[0].id();
        session.switch_surface(Surface::Structured).unwrap();
        session.edit_block(&heading, "Notes").unwrap();
        session.switch_surface(Surface::FreeText).unwrap();
        session.free_text_changed("<p>lost</p>").unwrap();
        session.switch_surface(Surface::Structured).unwrap();
        assert_eq!(session.markup(), "<h2>Notes</h2><p>My DocumentStart typing here...</p>");
    }

    #[test]
    fn test_clean_round_trip_discards_nothing() {
        let mut session = started("ebook");
        session.switch_surface(Surface::FreeText).unwrap();
        let outcome = session.switch_surface(Surface::Structured).unwrap();
        assert!(!outcome.discarded_free_text);
    }

    #[test]
    fn test_template_switch_resets_from_any_state() {
        let catalog = TemplateCatalog::builtin();
        let mut session = started("blank");
        session.add_block(BlockKind::Image).unwrap();
        session.set_title("Custom");
        session.switch_surface(Surface::FreeText).unwrap();
        session.free_text_changed("<p>draft</p>").unwrap();

        session.apply_template(catalog.get("lead-magnet").unwrap()).unwrap();
        assert_eq!(session.phase(), EditorPhase::StructuredEditing);
        assert_eq!(session.document().title(), "Lead Magnet");
        let blocks = session.document().blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind(), BlockKind::Heading);
        assert_eq!(blocks[0].content, "Lead Magnet");
        assert_eq!(
            blocks[1].content,
            "5 Essential Tips for SuccessDiscover the secrets that experts use to..."
        );
    }

    #[test]
    fn test_metadata_editable_in_every_phase() {
        let mut session = EditorSession::default();
        session.set_author("Amy");
        assert_eq!(session.document().author(), "Amy");
        let mut session = started("guide");
        session.switch_surface(Surface::FreeText).unwrap();
        session.set_title("Field Guide");
        assert_eq!(session.document().title(), "Field Guide");
    }
}
