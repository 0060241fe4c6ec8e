//! Market-intelligence records.
//!
//! Closed, tagged records for the three widget datasets (keyword metrics,
//! title candidates, niche scores) plus the trend series. Every categorical
//! field is an exhaustive enum so filters and sorts are checked at compile
//! time. The records themselves are immutable fixtures; only selection and
//! presentation state around them changes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

// ── Keyword metrics ─────────────────────────────────────────────────────────

/// How crowded a keyword is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Competition::Low => "low",
            Competition::Medium => "medium",
            Competition::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Competition::Low => "Low",
            Competition::Medium => "Medium",
            Competition::High => "High",
        }
    }
}

impl std::fmt::Display for Competition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of search interest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    /// Single-glyph indicator for tables.
    pub fn arrow(&self) -> char {
        match self {
            Trend::Up => '↑',
            Trend::Down => '↓',
            Trend::Stable => '→',
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the keyword table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetric {
    /// Unique within a fixture set.
    pub keyword: String,
    pub search_volume: u64,
    pub competition: Competition,
    pub trend: Trend,
    /// Cost per click in dollars.
    pub cost_per_click: f64,
}

/// Niche category selector on the keyword widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum NicheCategory {
    #[default]
    All,
    Finance,
    Fitness,
    Marketing,
    #[strum(serialize = "self-improvement")]
    SelfImprovement,
    Technology,
}

impl NicheCategory {
    pub const ALL: [NicheCategory; 6] = [
        NicheCategory::All,
        NicheCategory::Finance,
        NicheCategory::Fitness,
        NicheCategory::Marketing,
        NicheCategory::SelfImprovement,
        NicheCategory::Technology,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NicheCategory::All => "all",
            NicheCategory::Finance => "finance",
            NicheCategory::Fitness => "fitness",
            NicheCategory::Marketing => "marketing",
            NicheCategory::SelfImprovement => "self-improvement",
            NicheCategory::Technology => "technology",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NicheCategory::All => "All Niches",
            NicheCategory::Finance => "Personal Finance",
            NicheCategory::Fitness => "Fitness & Health",
            NicheCategory::Marketing => "Digital Marketing",
            NicheCategory::SelfImprovement => "Self Improvement",
            NicheCategory::Technology => "AI & Technology",
        }
    }
}

impl std::fmt::Display for NicheCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Title candidates ────────────────────────────────────────────────────────

/// Headline formula of a title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum TitleType {
    #[strum(serialize = "how-to", serialize = "howto")]
    HowTo,
    Listicle,
    Guide,
    #[strum(serialize = "case-study")]
    CaseStudy,
    Tutorial,
}

impl TitleType {
    pub const ALL: [TitleType; 5] = [
        TitleType::HowTo,
        TitleType::Listicle,
        TitleType::Guide,
        TitleType::CaseStudy,
        TitleType::Tutorial,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleType::HowTo => "how-to",
            TitleType::Listicle => "listicle",
            TitleType::Guide => "guide",
            TitleType::CaseStudy => "case-study",
            TitleType::Tutorial => "tutorial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TitleType::HowTo => "How-To",
            TitleType::Listicle => "List",
            TitleType::Guide => "Guide",
            TitleType::CaseStudy => "Case Study",
            TitleType::Tutorial => "Tutorial",
        }
    }
}

impl std::fmt::Display for TitleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emotional lever a title pulls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum EmotionalAppeal {
    Curiosity,
    Urgency,
    Value,
    Fear,
    Aspiration,
}

impl EmotionalAppeal {
    pub const ALL: [EmotionalAppeal; 5] = [
        EmotionalAppeal::Curiosity,
        EmotionalAppeal::Urgency,
        EmotionalAppeal::Value,
        EmotionalAppeal::Fear,
        EmotionalAppeal::Aspiration,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalAppeal::Curiosity => "curiosity",
            EmotionalAppeal::Urgency => "urgency",
            EmotionalAppeal::Value => "value",
            EmotionalAppeal::Fear => "fear",
            EmotionalAppeal::Aspiration => "aspiration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmotionalAppeal::Curiosity => "Curiosity",
            EmotionalAppeal::Urgency => "Urgency",
            EmotionalAppeal::Value => "Value",
            EmotionalAppeal::Fear => "Fear",
            EmotionalAppeal::Aspiration => "Aspiration",
        }
    }
}

impl std::fmt::Display for EmotionalAppeal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Quality band of a 0–100 title score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    Weak,
    Fair,
    Strong,
    Excellent,
}

impl ScoreTier {
    pub fn of(score: u8) -> Self {
        match score {
            90.. => ScoreTier::Excellent,
            80..=89 => ScoreTier::Strong,
            70..=79 => ScoreTier::Fair,
            _ => ScoreTier::Weak,
        }
    }
}

/// A scored title suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCandidate {
    /// Unique within a fixture set.
    pub title: String,
    /// 0–100.
    pub score: u8,
    #[serde(rename = "type")]
    pub title_type: TitleType,
    pub emotional_appeal: EmotionalAppeal,
}

impl TitleCandidate {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::of(self.score)
    }
}

// ── Niches ──────────────────────────────────────────────────────────────────

/// Opportunity score for one niche. Read-only display data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheScore {
    /// Unique within a fixture set.
    pub name: String,
    /// 0–100.
    pub value: u8,
    /// Signed growth in percent.
    pub growth_percent: f64,
    /// Display hint (`#rrggbb`).
    pub color: String,
}

/// One month of the niche trend chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: String,
    pub personal_finance: u8,
    pub fitness: u8,
    pub marketing: u8,
    pub self_improvement: u8,
    pub ai: u8,
}

/// Window selector on the niche widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    Quarter,
}

impl Timeframe {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Quarter => "quarter",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Selectors ───────────────────────────────────────────────────────────────

/// Error from parsing a [`Choice`] selector.
#[derive(Debug, thiserror::Error)]
#[error("unknown selector value '{0}'")]
pub struct ChoiceParseError(pub String);

/// A dropdown value: either "all" (no filtering) or one specific variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` passes this selector.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Choice::All);
        }
        T::from_str(s)
            .map(Choice::Only)
            .map_err(|_| ChoiceParseError(s.to_string()))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::All => write!(f, "all"),
            Choice::Only(v) => write!(f, "{v}"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_type_wire_names() {
        assert_eq!(serde_json::to_string(&TitleType::HowTo).unwrap(), "\"how-to\"");
        assert_eq!(serde_json::to_string(&TitleType::CaseStudy).unwrap(), "\"case-study\"");
        for t in TitleType::ALL {
            assert_eq!(TitleType::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_appeal_roundtrip() {
        for a in EmotionalAppeal::ALL {
            assert_eq!(EmotionalAppeal::from_str(a.as_str()), Some(a));
        }
        assert_eq!(EmotionalAppeal::from_str("joy"), None);
    }

    #[test]
    fn test_niche_category_roundtrip() {
        for n in NicheCategory::ALL {
            assert_eq!(NicheCategory::from_str(n.as_str()), Some(n));
        }
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!("all".parse::<Choice<TitleType>>().unwrap(), Choice::All);
        assert_eq!("".parse::<Choice<TitleType>>().unwrap(), Choice::All);
        assert_eq!(
            "Listicle".parse::<Choice<TitleType>>().unwrap(),
            Choice::Only(TitleType::Listicle)
        );
        assert!("poem".parse::<Choice<TitleType>>().is_err());
    }

    #[test]
    fn test_choice_admits() {
        let any: Choice<EmotionalAppeal> = Choice::All;
        assert!(any.admits(&EmotionalAppeal::Fear));
        let value = Choice::Only(EmotionalAppeal::Value);
        assert!(value.admits(&EmotionalAppeal::Value));
        assert!(!value.admits(&EmotionalAppeal::Fear));
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::of(100), ScoreTier::Excellent);
        assert_eq!(ScoreTier::of(90), ScoreTier::Excellent);
        assert_eq!(ScoreTier::of(89), ScoreTier::Strong);
        assert_eq!(ScoreTier::of(70), ScoreTier::Fair);
        assert_eq!(ScoreTier::of(12), ScoreTier::Weak);
    }

    #[test]
    fn test_keyword_metric_json_shape() {
        let json = r#"{"keyword":"a","searchVolume":10,"competition":"low","trend":"down","costPerClick":1.5}"#;
        let m: KeywordMetric = serde_json::from_str(json).unwrap();
        assert_eq!(m.competition, Competition::Low);
        assert_eq!(m.trend, Trend::Down);
        assert_eq!(m.search_volume, 10);
    }
}
