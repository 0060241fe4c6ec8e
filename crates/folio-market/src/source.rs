//! Market data sources.
//!
//! The widgets never read fixtures directly; they ask a [`MarketSource`].
//! [`FixtureSource`] answers from the embedded datasets after a simulated
//! network delay, which is enough to exercise loading states and request
//! races. A production source would call a market-data API instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_types::{KeywordMetric, NicheCategory, NicheScore, TitleCandidate, Timeframe, TrendPoint};
use tracing::debug;

use crate::{MarketFixtures, Result};

/// Niche scores plus the trend chart series, fetched together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NicheReport {
    pub niches: Vec<NicheScore>,
    pub trends: Vec<TrendPoint>,
}

/// Where market data comes from.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Source name for logs (e.g., "fixture").
    fn name(&self) -> &str;

    /// Keyword metrics for a niche.
    async fn keywords(&self, niche: NicheCategory) -> Result<Vec<KeywordMetric>>;

    /// Candidate titles for a topic, unfiltered and unsorted.
    async fn titles(&self, topic: &str) -> Result<Vec<TitleCandidate>>;

    /// Niche scores and trends over a window.
    async fn niches(&self, timeframe: Timeframe) -> Result<NicheReport>;
}

/// Simulated per-request latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLatency {
    pub keywords: Duration,
    pub titles: Duration,
    pub niches: Duration,
}

impl SourceLatency {
    pub fn none() -> Self {
        Self {
            keywords: Duration::ZERO,
            titles: Duration::ZERO,
            niches: Duration::ZERO,
        }
    }
}

impl Default for SourceLatency {
    fn default() -> Self {
        Self {
            keywords: Duration::from_millis(800),
            titles: Duration::from_millis(1200),
            niches: Duration::from_millis(1000),
        }
    }
}

/// Answers every request with the same fixture data.
///
/// Selector arguments (niche, timeframe, topic) only affect the log line;
/// the sample data has no per-selector variants.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    fixtures: Arc<MarketFixtures>,
    latency: SourceLatency,
}

impl FixtureSource {
    pub fn new(fixtures: Arc<MarketFixtures>, latency: SourceLatency) -> Self {
        Self { fixtures, latency }
    }

    /// Embedded fixtures with default latency.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            Arc::new(MarketFixtures::builtin()?),
            SourceLatency::default(),
        ))
    }

    pub fn fixtures(&self) -> &MarketFixtures {
        &self.fixtures
    }

    async fn delay(&self, d: Duration) {
        if !d.is_zero() {
            tokio::time::sleep(d).await;
        }
    }
}

#[async_trait]
impl MarketSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn keywords(&self, niche: NicheCategory) -> Result<Vec<KeywordMetric>> {
        self.delay(self.latency.keywords).await;
        debug!(%niche, rows = self.fixtures.keywords.len(), "fixture keywords");
        Ok(self.fixtures.keywords.clone())
    }

    async fn titles(&self, topic: &str) -> Result<Vec<TitleCandidate>> {
        self.delay(self.latency.titles).await;
        debug!(topic, rows = self.fixtures.titles.len(), "fixture titles");
        Ok(self.fixtures.titles.clone())
    }

    async fn niches(&self, timeframe: Timeframe) -> Result<NicheReport> {
        self.delay(self.latency.niches).await;
        debug!(%timeframe, rows = self.fixtures.niches.len(), "fixture niches");
        Ok(NicheReport {
            niches: self.fixtures.niches.clone(),
            trends: self.fixtures.trends.clone(),
        })
    }
}
