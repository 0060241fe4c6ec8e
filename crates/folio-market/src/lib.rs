//! Market-intelligence engine for folio.
//!
//! Pure filter/sort pipelines over fixed-shape records, per-widget selection
//! sets, and the loading state around simulated fetches.
//!
//! # Pipelines
//!
//! | Widget   | Input                                  | Output order          |
//! |----------|----------------------------------------|-----------------------|
//! | keywords | query (substring, case-insensitive)    | source order          |
//! | titles   | topic gate, type AND appeal selectors  | score descending      |
//! | niches   | none (timeframe is display-only)       | listing order, top 4  |

pub mod error;
pub mod feed;
pub mod fixtures;
pub mod keywords;
pub mod niche;
pub mod selection;
pub mod selector;
pub mod source;
pub mod titles;
pub mod widgets;

pub use error::MarketError;
pub use feed::{Completion, Feed, FetchTicket};
pub use fixtures::MarketFixtures;
pub use keywords::{filter_keywords, format_volume};
pub use niche::{GrowthClass, INSIGHT_COUNT, NicheInsight, NicheSummary, growth_label, summarize};
pub use selection::SelectionSet;
pub use selector::{parse_choice, parse_niche, parse_timeframe};
pub use source::{FixtureSource, MarketSource, NicheReport, SourceLatency};
pub use titles::{TitleQuery, filter_titles, parse_keyword_list, rank_titles};
pub use widgets::{KeywordWidget, NicheWidget, TitleWidget};

/// Result type for market operations.
pub type Result<T> = std::result::Result<T, MarketError>;
