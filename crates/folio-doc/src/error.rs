//! Error types for document operations.

use thiserror::Error;

use crate::BlockId;

/// Errors that can occur while editing a block document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    /// Block not found in document.
    #[error("block not found: {0:?}")]
    BlockNotFound(BlockId),

    /// Reorder source index outside the sequence.
    #[error("source index {index} out of range for {len} blocks")]
    SourceOutOfRange { index: usize, len: usize },

    /// Reorder destination index outside the post-removal sequence.
    #[error("destination index {index} out of range for {len} blocks")]
    DestinationOutOfRange { index: usize, len: usize },

    /// Two blocks with the same ID in one document.
    #[error("block already exists: {0:?}")]
    DuplicateBlock(BlockId),

    /// The serializer has no markup form for this kind.
    #[error("no markup form for block kind '{0}'")]
    UnsupportedBlockKind(String),

    /// Operation not available in the current editor phase.
    #[error("{operation} not allowed while {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: &'static str,
    },

    /// Operation not available on the active editing surface.
    #[error("{operation} not allowed on the {surface} surface")]
    WrongSurface {
        operation: &'static str,
        surface: &'static str,
    },

    /// No template with this ID.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// Tag pattern failed to compile.
    #[error("markup pattern error: {0}")]
    Pattern(String),

    /// Snapshot (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}
