//! Embedded sample datasets.
//!
//! The four JSON assets stand in for a live market-data API. They are
//! compiled into the binary and validated on load: keys must be unique and
//! scores must stay within 0–100.

use std::collections::HashSet;

use folio_types::{KeywordMetric, NicheScore, TitleCandidate, TrendPoint};
use serde::de::DeserializeOwned;

use crate::{MarketError, Result};

const KEYWORDS_JSON: &str = include_str!("../assets/keywords.json");
const TITLES_JSON: &str = include_str!("../assets/titles.json");
const NICHES_JSON: &str = include_str!("../assets/niches.json");
const TRENDS_JSON: &str = include_str!("../assets/trends.json");

/// Every dataset the widgets read.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketFixtures {
    pub keywords: Vec<KeywordMetric>,
    pub titles: Vec<TitleCandidate>,
    pub niches: Vec<NicheScore>,
    pub trends: Vec<TrendPoint>,
}

impl MarketFixtures {
    /// Parse and validate the embedded datasets.
    pub fn builtin() -> Result<Self> {
        Self::from_json(KEYWORDS_JSON, TITLES_JSON, NICHES_JSON, TRENDS_JSON)
    }

    /// Parse and validate caller-supplied JSON arrays.
    pub fn from_json(keywords: &str, titles: &str, niches: &str, trends: &str) -> Result<Self> {
        let fixtures = Self {
            keywords: parse(keywords)?,
            titles: parse(titles)?,
            niches: parse(niches)?,
            trends: parse(trends)?,
        };
        fixtures.validate()?;
        Ok(fixtures)
    }

    pub fn validate(&self) -> Result<()> {
        unique("keyword", self.keywords.iter().map(|k| k.keyword.as_str()))?;
        unique("title", self.titles.iter().map(|t| t.title.as_str()))?;
        unique("niche", self.niches.iter().map(|n| n.name.as_str()))?;

        for k in &self.keywords {
            if !(k.cost_per_click.is_finite() && k.cost_per_click >= 0.0) {
                return Err(MarketError::InvalidFixture(format!(
                    "keyword '{}' has cost per click {}",
                    k.keyword, k.cost_per_click
                )));
            }
        }
        for t in &self.titles {
            if t.score > 100 {
                return Err(MarketError::InvalidFixture(format!(
                    "title '{}' scores {}",
                    t.title, t.score
                )));
            }
        }
        for n in &self.niches {
            if n.value > 100 || !n.growth_percent.is_finite() {
                return Err(MarketError::InvalidFixture(format!(
                    "niche '{}' has value {} growth {}",
                    n.name, n.value, n.growth_percent
                )));
            }
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

fn unique<'a>(what: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(MarketError::InvalidFixture(format!("duplicate {what} '{key}'")));
        }
    }
    Ok(())
}
