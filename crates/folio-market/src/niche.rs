//! Niche insights derived from the opportunity scores.

use folio_types::NicheScore;
use serde::Serialize;

/// How many niches the insight panel lists.
pub const INSIGHT_COUNT: usize = 4;

/// Growth classification shown beside each niche.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthClass {
    /// Above 15%; gets the "Trending" badge.
    Trending,
    /// Above 10%.
    Strong,
    Steady,
}

impl GrowthClass {
    pub fn of(growth_percent: f64) -> Self {
        if growth_percent > 15.0 {
            GrowthClass::Trending
        } else if growth_percent > 10.0 {
            GrowthClass::Strong
        } else {
            GrowthClass::Steady
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthClass::Trending => "trending",
            GrowthClass::Strong => "strong",
            GrowthClass::Steady => "steady",
        }
    }
}

impl std::fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the insight panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NicheInsight {
    pub name: String,
    pub value: u8,
    pub growth_percent: f64,
    pub growth: GrowthClass,
    /// This niche's value as a percentage of all niche values.
    pub share_percent: f64,
}

impl NicheInsight {
    /// `"+12% growth"`.
    pub fn growth_label(&self) -> String {
        growth_label(self.growth_percent)
    }
}

/// Signed growth label, `"+12% growth"` / `"-3% growth"` / `"0% growth"`.
pub fn growth_label(growth_percent: f64) -> String {
    let sign = if growth_percent > 0.0 { "+" } else { "" };
    format!("{sign}{growth_percent}% growth")
}

/// Everything the insight panel shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NicheSummary {
    /// First `INSIGHT_COUNT` niches in listing order.
    pub top: Vec<NicheInsight>,
    /// Highest value; first listed wins ties.
    pub top_opportunity: Option<String>,
    /// Highest growth; first listed wins ties.
    pub fastest_growing: Option<String>,
}

pub fn summarize(niches: &[NicheScore], count: usize) -> NicheSummary {
    let total: f64 = niches.iter().map(|n| f64::from(n.value)).sum();
    let top = niches
        .iter()
        .take(count)
        .map(|n| NicheInsight {
            name: n.name.clone(),
            value: n.value,
            growth_percent: n.growth_percent,
            growth: GrowthClass::of(n.growth_percent),
            share_percent: if total > 0.0 {
                f64::from(n.value) / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    let top_opportunity = niches
        .iter()
        .fold(None::<&NicheScore>, |best, n| match best {
            Some(b) if b.value >= n.value => Some(b),
            _ => Some(n),
        })
        .map(|n| n.name.clone());
    let fastest_growing = niches
        .iter()
        .fold(None::<&NicheScore>, |best, n| match best {
            Some(b) if b.growth_percent >= n.growth_percent => Some(b),
            _ => Some(n),
        })
        .map(|n| n.name.clone());

    NicheSummary {
        top,
        top_opportunity,
        fastest_growing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarketFixtures;

    #[test]
    fn test_summary_over_fixture() {
        let f = MarketFixtures::builtin().unwrap();
        let s = summarize(&f.niches, INSIGHT_COUNT);
        let names: Vec<_> = s.top.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            ["Personal Finance", "Fitness & Health", "Digital Marketing", "Self Improvement"]
        );
        assert_eq!(s.top_opportunity.as_deref(), Some("Personal Finance"));
        assert_eq!(s.fastest_growing.as_deref(), Some("AI & Technology"));

        assert_eq!(s.top[0].growth, GrowthClass::Strong);
        assert_eq!(s.top[2].growth, GrowthClass::Strong);
        assert_eq!(s.top[3].growth, GrowthClass::Steady);

        // 85 of 562 total.
        assert!((s.top[0].share_percent - 85.0 / 562.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_thresholds_are_strict() {
        assert_eq!(GrowthClass::of(15.0), GrowthClass::Strong);
        assert_eq!(GrowthClass::of(15.5), GrowthClass::Trending);
        assert_eq!(GrowthClass::of(10.0), GrowthClass::Steady);
        assert_eq!(GrowthClass::of(-4.0), GrowthClass::Steady);
    }

    #[test]
    fn test_growth_label_sign() {
        assert_eq!(growth_label(12.0), "+12% growth");
        assert_eq!(growth_label(-3.0), "-3% growth");
        assert_eq!(growth_label(0.0), "0% growth");
    }

    #[test]
    fn test_empty_input() {
        let s = summarize(&[], INSIGHT_COUNT);
        assert!(s.top.is_empty());
        assert_eq!(s.top_opportunity, None);
        assert_eq!(s.fastest_growing, None);
    }
}
