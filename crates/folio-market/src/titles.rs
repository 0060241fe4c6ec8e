//! Title suggestion filtering and ranking.

use std::cmp::Reverse;

use folio_types::{Choice, EmotionalAppeal, TitleCandidate, TitleType};

/// Inputs of the title generator form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleQuery {
    /// Must be non-blank for the pipeline to run.
    pub topic: String,
    /// Optional focus keywords. Carried along, not used for filtering.
    pub keywords: Vec<String>,
    pub title_type: Choice<TitleType>,
    pub appeal: Choice<EmotionalAppeal>,
}

impl TitleQuery {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, title_type: Choice<TitleType>) -> Self {
        self.title_type = title_type;
        self
    }

    pub fn with_appeal(mut self, appeal: Choice<EmotionalAppeal>) -> Self {
        self.appeal = appeal;
        self
    }

    /// Set the keywords from the comma-separated form field.
    pub fn with_keyword_list(mut self, csv: &str) -> Self {
        self.keywords = parse_keyword_list(csv);
        self
    }

    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}

/// Split on commas, trim, drop empty entries.
pub fn parse_keyword_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Type and appeal filters, ANDed, in input order.
pub fn filter_titles<'a>(
    candidates: &'a [TitleCandidate],
    title_type: Choice<TitleType>,
    appeal: Choice<EmotionalAppeal>,
) -> Vec<&'a TitleCandidate> {
    candidates
        .iter()
        .filter(|c| title_type.admits(&c.title_type))
        .filter(|c| appeal.admits(&c.emotional_appeal))
        .collect()
}

/// Run the whole pipeline: topic gate, filters, then score descending.
///
/// A blank topic yields no results. Equal scores keep their filtered order.
pub fn rank_titles<'a>(candidates: &'a [TitleCandidate], query: &TitleQuery) -> Vec<&'a TitleCandidate> {
    if !query.has_topic() {
        return Vec::new();
    }
    let mut out = filter_titles(candidates, query.title_type, query.appeal);
    out.sort_by_key(|c| Reverse(c.score));
    out
}
