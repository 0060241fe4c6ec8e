//! Shared identity, block, and market record types for folio.
//!
//! This crate is the foundation: typed IDs, blocks, document metadata,
//! templates, market-intelligence records and subscription plans. It has
//! **no internal folio dependencies**. It is a pure leaf crate that the document
//! engine, the market engine and the studio shell build on.
//!
//! # Key Types
//!
//! |--------------------|---------------------------------------------|
//! | Type               | Purpose                                     |
//! |--------------------|---------------------------------------------|
//! | [`BlockId`]        | Stable identity of one block                |
//! | [`Block`]          | Structured content unit (kind + content)    |
//! | [`BlockKind`]      | heading, paragraph, image, list, table, hr  |
//! | [`DocumentMeta`]   | Title and author, outside the block list    |
//! | [`Template`]       | Immutable seed for a new document           |
//! | [`KeywordMetric`]  | Keyword table row                           |
//! | [`TitleCandidate`] | Scored title suggestion                     |
//! | [`NicheScore`]     | Niche opportunity score                     |
//! | [`Choice`]         | "all" or one variant (dropdown)          |
//! | [`Plan`]           | Subscription tier                           |
//! |--------------------|---------------------------------------------|

pub mod block;
pub mod document;
pub mod ids;
pub mod market;
pub mod plan;

// Re-export primary types at crate root for convenience.
pub use block::{Block, BlockKind};
pub use document::{DEFAULT_AUTHOR, DEFAULT_TITLE, DocumentMeta, Template};
pub use ids::{BlockId, DocumentId};
pub use market::{
    Choice, ChoiceParseError, Competition, EmotionalAppeal, KeywordMetric, NicheCategory,
    NicheScore, ScoreTier, Timeframe, TitleCandidate, TitleType, Trend, TrendPoint,
};
pub use plan::Plan;
