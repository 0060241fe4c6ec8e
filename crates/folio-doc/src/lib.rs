//! Block document engine for folio.
//!
//! A document is an ordered list of blocks. This crate owns everything that
//! transforms that list:
//!
//! - [`BlockDocument`]: the sequence plus metadata, with ID-checked mutations
//! - [`reorder`]: splice-move with an explicit reject policy for bad indices
//! - [`markup`]: one-way, lossy serialization to linear markup
//! - [`EditorSession`]: which surface (structured or free-text) is authoritative
//!
//! Nothing here does I/O. Rendering, persistence and the rich-text widget
//! live behind the boundaries in `folio-studio`.

pub mod document;
pub mod error;
pub mod markup;
pub mod reorder;
pub mod session;
pub mod templates;

pub use document::{BlockDocument, DocumentSnapshot, STARTER_HEADING, STARTER_PARAGRAPH};
pub use error::DocError;
pub use markup::{markup_to_text, strip_tags, to_markup};
pub use reorder::{DropResult, apply_drop, reorder, reorder_in_place};
pub use session::{EditorPhase, EditorSession, INITIAL_MARKUP, Surface, SwitchOutcome};
pub use templates::{TemplateCatalog, initial_blocks};

// Re-export the types this crate operates on.
pub use folio_types::{Block, BlockId, BlockKind, DocumentId, DocumentMeta, Template};

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocError>;
