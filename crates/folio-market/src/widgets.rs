//! The three market-intelligence widgets.
//!
//! Each widget owns its feed, its selector state and (where it has one) its
//! own [`SelectionSet`]. Refreshes are split into `begin_*`/`finish_*` so a
//! host can overlap requests; the `async` helpers run both halves back to
//! back against a [`MarketSource`].

use folio_types::{KeywordMetric, NicheCategory, TitleCandidate, Timeframe};
use tracing::{debug, info};

use crate::feed::{Completion, FetchTicket, Feed};
use crate::keywords::filter_keywords;
use crate::niche::{INSIGHT_COUNT, NicheSummary, summarize};
use crate::selection::SelectionSet;
use crate::source::{MarketSource, NicheReport};
use crate::titles::{TitleQuery, rank_titles};
use crate::Result;

// ============================================================================
// Keywords
// ============================================================================

/// Keyword research table.
#[derive(Clone, Debug, Default)]
pub struct KeywordWidget {
    feed: Feed<Vec<KeywordMetric>>,
    query: String,
    niche: NicheCategory,
    selected: SelectionSet,
}

impl KeywordWidget {
    /// Starts showing `initial` with no request in flight.
    pub fn new(initial: Vec<KeywordMetric>) -> Self {
        Self {
            feed: Feed::new(initial),
            ..Self::default()
        }
    }

    pub fn feed(&self) -> &Feed<Vec<KeywordMetric>> {
        &self.feed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn niche(&self) -> NicheCategory {
        self.niche
    }

    /// Rows matching the current query, in source order.
    pub fn visible(&self) -> Vec<&KeywordMetric> {
        filter_keywords(self.feed.data(), &self.query)
    }

    /// Change the niche and start a refresh. The niche does not filter rows.
    pub fn begin_niche(&mut self, niche: NicheCategory) -> FetchTicket {
        self.niche = niche;
        info!(%niche, "keyword niche changed");
        self.feed.begin()
    }

    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Vec<KeywordMetric>>) -> Completion {
        self.feed.complete(ticket, result)
    }

    pub async fn select_niche(&mut self, niche: NicheCategory, source: &dyn MarketSource) -> Completion {
        let ticket = self.begin_niche(niche);
        let result = source.keywords(niche).await;
        self.finish(ticket, result)
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// Returns whether `keyword` is selected afterwards.
    pub fn toggle(&mut self, keyword: &str) -> bool {
        self.selected.toggle(keyword)
    }
}

// ============================================================================
// Titles
// ============================================================================

/// Title generator with scored suggestions.
#[derive(Clone, Debug, Default)]
pub struct TitleWidget {
    feed: Feed<Vec<TitleCandidate>>,
    query: TitleQuery,
    selected: SelectionSet,
}

impl TitleWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&self) -> &Feed<Vec<TitleCandidate>> {
        &self.feed
    }

    /// Ranked suggestions from the last completed generation.
    pub fn results(&self) -> &[TitleCandidate] {
        self.feed.data()
    }

    pub fn query(&self) -> &TitleQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut TitleQuery {
        &mut self.query
    }

    pub fn set_query(&mut self, query: TitleQuery) {
        self.query = query;
    }

    /// Start a generation run.
    ///
    /// Returns `None` without touching the feed when the topic is blank; the
    /// results are cleared in that case.
    pub fn begin_generate(&mut self) -> Option<FetchTicket> {
        if !self.query.has_topic() {
            debug!("title generation skipped: blank topic");
            self.feed.set(Vec::new());
            return None;
        }
        Some(self.feed.begin())
    }

    /// Rank raw candidates with the current query and land them.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Vec<TitleCandidate>>) -> Completion {
        let query = &self.query;
        let ranked: Result<Vec<TitleCandidate>> =
            result.map(|candidates| rank_titles(&candidates, query).into_iter().cloned().collect());
        self.feed.complete(ticket, ranked)
    }

    pub async fn generate(&mut self, source: &dyn MarketSource) -> Option<Completion> {
        let ticket = self.begin_generate()?;
        let result = source.titles(&self.query.topic).await;
        Some(self.finish(ticket, result))
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    pub fn toggle(&mut self, title: &str) -> bool {
        self.selected.toggle(title)
    }
}

// ============================================================================
// Niches
// ============================================================================

/// Niche thermometer: opportunity scores, trend chart and insights.
#[derive(Clone, Debug, Default)]
pub struct NicheWidget {
    feed: Feed<NicheReport>,
    timeframe: Timeframe,
}

impl NicheWidget {
    pub fn new(initial: NicheReport) -> Self {
        Self {
            feed: Feed::new(initial),
            timeframe: Timeframe::default(),
        }
    }

    pub fn feed(&self) -> &Feed<NicheReport> {
        &self.feed
    }

    pub fn report(&self) -> &NicheReport {
        self.feed.data()
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn summary(&self) -> NicheSummary {
        summarize(&self.feed.data().niches, INSIGHT_COUNT)
    }

    /// Change the window and start a refresh. Display-only.
    pub fn begin_timeframe(&mut self, timeframe: Timeframe) -> FetchTicket {
        self.timeframe = timeframe;
        info!(%timeframe, "niche timeframe changed");
        self.feed.begin()
    }

    pub fn finish(&mut self, ticket: FetchTicket, result: Result<NicheReport>) -> Completion {
        self.feed.complete(ticket, result)
    }

    pub async fn select_timeframe(&mut self, timeframe: Timeframe, source: &dyn MarketSource) -> Completion {
        let ticket = self.begin_timeframe(timeframe);
        let result = source.niches(timeframe).await;
        self.finish(ticket, result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use folio_types::{Choice, TitleType};

    use crate::source::{FixtureSource, SourceLatency};
    use crate::{MarketError, MarketFixtures};

    fn source() -> FixtureSource {
        FixtureSource::new(
            Arc::new(MarketFixtures::builtin().unwrap()),
            SourceLatency::none(),
        )
    }

    struct DownSource;

    #[async_trait]
    impl MarketSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn keywords(&self, _niche: NicheCategory) -> Result<Vec<KeywordMetric>> {
            Err(MarketError::SourceUnavailable("keywords offline".into()))
        }

        async fn titles(&self, _topic: &str) -> Result<Vec<TitleCandidate>> {
            Err(MarketError::SourceUnavailable("titles offline".into()))
        }

        async fn niches(&self, _timeframe: Timeframe) -> Result<NicheReport> {
            Err(MarketError::SourceUnavailable("niches offline".into()))
        }
    }

    #[tokio::test]
    async fn test_keyword_query_and_niche_refresh() {
        let src = source();
        let mut w = KeywordWidget::new(src.fixtures().keywords.clone());
        w.set_query("WORK");
        let rows: Vec<_> = w.visible().iter().map(|m| m.keyword.clone()).collect();
        assert_eq!(rows, ["home workout routines", "remote work productivity"]);

        let outcome = w.select_niche(NicheCategory::Fitness, &src).await;
        assert_eq!(outcome, Completion::Applied);
        assert_eq!(w.niche(), NicheCategory::Fitness);
        // Niche is display-only: the same rows stay visible.
        assert_eq!(w.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_keyword_failure_surfaces_error() {
        let src = source();
        let mut w = KeywordWidget::new(src.fixtures().keywords.clone());
        let outcome = w.select_niche(NicheCategory::Marketing, &DownSource).await;
        assert_eq!(outcome, Completion::Failed);
        assert!(!w.feed().loading());
        assert!(w.feed().error().unwrap().contains("keywords offline"));
        assert_eq!(w.visible().len(), 10);
    }

    #[test]
    fn test_keyword_selection_is_per_widget() {
        let mut a = KeywordWidget::default();
        let b = KeywordWidget::default();
        assert!(a.toggle("mindfulness techniques"));
        assert!(a.selected().contains("mindfulness techniques"));
        assert!(b.selected().is_empty());
    }

    #[tokio::test]
    async fn test_title_generation() {
        let src = source();
        let mut w = TitleWidget::new();
        w.set_query(TitleQuery::new("digital products").with_type(Choice::Only(TitleType::HowTo)));
        assert_eq!(w.generate(&src).await, Some(Completion::Applied));
        let titles: Vec<_> = w.results().iter().map(|c| c.score).collect();
        assert_eq!(titles, [87, 80]);

        let best = w.results()[0].title.clone();
        assert!(w.toggle(&best));
        assert_eq!(w.selected().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_topic_clears_results_without_fetch() {
        let src = source();
        let mut w = TitleWidget::new();
        w.set_query(TitleQuery::new("pdf"));
        w.generate(&src).await;
        assert_eq!(w.results().len(), 8);

        w.query_mut().topic = "   ".into();
        assert_eq!(w.generate(&DownSource).await, None);
        assert!(w.results().is_empty());
        assert_eq!(w.feed().error(), None);
    }

    #[test]
    fn test_blank_topic_while_generating() {
        let mut w = TitleWidget::new();
        w.set_query(TitleQuery::new("pdf"));
        let ticket = w.begin_generate().unwrap();
        assert!(w.feed().loading());

        w.query_mut().topic = String::new();
        assert!(w.begin_generate().is_none());
        assert!(!w.feed().loading());

        let late = vec![TitleCandidate {
            title: "Late PDF title".into(),
            score: 90,
            title_type: TitleType::Guide,
            emotional_appeal: folio_types::EmotionalAppeal::Value,
        }];
        assert_eq!(w.finish(ticket, Ok(late)), Completion::Stale);
        assert!(w.results().is_empty());
    }

    #[tokio::test]
    async fn test_niche_timeframe_and_summary() {
        let src = source();
        let mut w = NicheWidget::default();
        assert!(w.summary().top.is_empty());
        w.select_timeframe(Timeframe::Quarter, &src).await;
        assert_eq!(w.timeframe(), Timeframe::Quarter);
        assert_eq!(w.report().trends.len(), 7);
        assert_eq!(w.summary().top.len(), 4);
    }

    #[test]
    fn test_overlapping_niche_refreshes() {
        let fixtures = MarketFixtures::builtin().unwrap();
        let mut w = NicheWidget::default();
        let week = w.begin_timeframe(Timeframe::Week);
        let quarter = w.begin_timeframe(Timeframe::Quarter);
        let full = NicheReport {
            niches: fixtures.niches.clone(),
            trends: fixtures.trends.clone(),
        };
        assert_eq!(w.finish(quarter, Ok(full)), Completion::Applied);
        assert_eq!(w.finish(week, Ok(NicheReport::default())), Completion::Stale);
        assert_eq!(w.report().niches.len(), 8);
        assert_eq!(w.timeframe(), Timeframe::Quarter);
    }
}
