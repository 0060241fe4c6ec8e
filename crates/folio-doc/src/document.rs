//! Ordered block document.
//!
//! # Document Structure
//!
//! ```text
//! BlockDocument
//! ├── id        DocumentId (UUIDv7)
//! ├── meta      title + author (not part of the sequence)
//! ├── blocks    Vec<Block>, order is the only structure
//! └── version   bumped on every successful mutation
//! ```
//!
//! Invariant: no two blocks share an ID. Every constructor that accepts
//! caller-supplied blocks checks it; every mutation either mints a fresh ID
//! or moves an existing block.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markup::to_markup;
use crate::reorder::reorder_in_place;
use crate::templates::initial_blocks;
use crate::{Block, BlockId, BlockKind, DocError, DocumentId, DocumentMeta, Result, Template};

/// Heading content of the document shown before a template is chosen.
pub const STARTER_HEADING: &str = "My Document";

/// Paragraph content of the document shown before a template is chosen.
pub const STARTER_PARAGRAPH: &str = "Start editing your content here...";

/// Serializable document state, for hand-off to an external store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    pub meta: DocumentMeta,
    pub blocks: Vec<Block>,
}

/// An ordered sequence of blocks plus its metadata.
#[derive(Clone, Debug)]
pub struct BlockDocument {
    id: DocumentId,
    meta: DocumentMeta,
    blocks: Vec<Block>,
    version: u64,
}

impl BlockDocument {
    /// An empty document.
    pub fn new(meta: DocumentMeta) -> Self {
        Self {
            id: DocumentId::new(),
            meta,
            blocks: Vec::new(),
            version: 0,
        }
    }

    /// A document over caller-supplied blocks. Rejects duplicate IDs.
    pub fn with_blocks(meta: DocumentMeta, blocks: Vec<Block>) -> Result<Self> {
        check_unique(&blocks)?;
        Ok(Self {
            id: DocumentId::new(),
            meta,
            blocks,
            version: 0,
        })
    }

    /// The heading + paragraph document the editor opens with.
    pub fn starter(meta: DocumentMeta) -> Self {
        Self {
            id: DocumentId::new(),
            meta,
            blocks: vec![
                Block::heading(STARTER_HEADING),
                Block::paragraph(STARTER_PARAGRAPH),
            ],
            version: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn author(&self) -> &str {
        &self.meta.author
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of successful mutations since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == *id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == *id)
    }

    /// Serialize the current sequence to markup.
    pub fn markup(&self) -> Result<String> {
        to_markup(&self.blocks)
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.meta.title = title.into();
        self.version += 1;
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.meta.author = author.into();
        self.version += 1;
    }

    // =========================================================================
    // Structural mutations
    // =========================================================================

    /// Append a new block at the end. Returns its fresh ID.
    pub fn push_block(&mut self, kind: BlockKind, content: impl Into<String>) -> BlockId {
        let block = Block::new(kind, content);
        let id = block.id();
        self.blocks.push(block);
        self.touch("push_block", id);
        id
    }

    /// Insert a new block after a reference block (`None` = start of document).
    pub fn insert_block(
        &mut self,
        after: Option<&BlockId>,
        kind: BlockKind,
        content: impl Into<String>,
    ) -> Result<BlockId> {
        let index = match after {
            None => 0,
            Some(reference) => {
                self.position(reference)
                    .ok_or(DocError::BlockNotFound(*reference))?
                    + 1
            }
        };
        let block = Block::new(kind, content);
        let id = block.id();
        self.blocks.insert(index, block);
        self.touch("insert_block", id);
        Ok(id)
    }

    /// Remove a block, returning it.
    pub fn remove_block(&mut self, id: &BlockId) -> Result<Block> {
        let index = self.position(id).ok_or(DocError::BlockNotFound(*id))?;
        let removed = self.blocks.remove(index);
        self.touch("remove_block", *id);
        Ok(removed)
    }

    /// Replace a block's content. The block keeps its ID and kind.
    pub fn edit_block(&mut self, id: &BlockId, content: impl Into<String>) -> Result<()> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.id() == *id)
            .ok_or(DocError::BlockNotFound(*id))?;
        block.set_content(content);
        self.touch("edit_block", *id);
        Ok(())
    }

    /// Splice-move by index. See [`crate::reorder`] for the range policy.
    ///
    /// Returns `true` if the order changed.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> Result<bool> {
        let moved_id = self.blocks.get(source).map(Block::id);
        let changed = reorder_in_place(&mut self.blocks, source, destination)?;
        if let (true, Some(id)) = (changed, moved_id) {
            self.touch("reorder", id);
        }
        Ok(changed)
    }

    /// Move a block (by ID) to a post-removal index.
    pub fn move_block(&mut self, id: &BlockId, to: usize) -> Result<bool> {
        let source = self.position(id).ok_or(DocError::BlockNotFound(*id))?;
        self.reorder(source, Some(to))
    }

    /// Replace the whole sequence and title from a template.
    pub fn apply_template(&mut self, template: &Template) -> Result<()> {
        self.blocks = initial_blocks(template)?;
        self.meta.title = template.name.clone();
        self.version += 1;
        debug!(template = %template.id, len = self.blocks.len(), "applied template");
        Ok(())
    }

    fn touch(&mut self, op: &'static str, id: BlockId) {
        self.version += 1;
        debug!(op, block = %id, len = self.blocks.len(), version = self.version, "document mutated");
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            id: self.id,
            meta: self.meta.clone(),
            blocks: self.blocks.clone(),
        }
    }

    /// Restore from a snapshot. Rejects duplicate block IDs.
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Result<Self> {
        check_unique(&snapshot.blocks)?;
        Ok(Self {
            id: snapshot.id,
            meta: snapshot.meta,
            blocks: snapshot.blocks,
            version: 0,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.snapshot()).map_err(|e| DocError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: DocumentSnapshot =
            serde_json::from_str(json).map_err(|e| DocError::Serialization(e.to_string()))?;
        Self::from_snapshot(snapshot)
    }
}

fn check_unique(blocks: &[Block]) -> Result<()> {
    let mut seen = HashSet::with_capacity(blocks.len());
    for block in blocks {
        if !seen.insert(block.id()) {
            return Err(DocError::DuplicateBlock(block.id()));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
