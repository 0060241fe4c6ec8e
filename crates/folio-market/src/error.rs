//! Error types for the market engine.

use thiserror::Error;

/// Errors from fixture loading, data sources and selector parsing.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Fixture parsed but breaks a record invariant.
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// Fixture JSON did not parse.
    #[error("fixture parse error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// The data source could not answer.
    #[error("market source unavailable: {0}")]
    SourceUnavailable(String),

    /// A dropdown value that names no variant.
    #[error("unknown {kind} '{value}'")]
    UnknownSelector { kind: &'static str, value: String },
}
