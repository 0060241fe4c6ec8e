//! Keyword table filtering.

use folio_types::KeywordMetric;

/// Keep metrics whose keyword contains `query`, ignoring case.
///
/// A blank query (empty or whitespace only) keeps everything. Otherwise the
/// query is matched untrimmed. Fixture order is preserved; keyword results
/// are never sorted.
pub fn filter_keywords<'a>(metrics: &'a [KeywordMetric], query: &str) -> Vec<&'a KeywordMetric> {
    if query.trim().is_empty() {
        return metrics.iter().collect();
    }
    let needle = query.to_lowercase();
    metrics
        .iter()
        .filter(|m| m.keyword.to_lowercase().contains(&needle))
        .collect()
}

/// `12500` → `"12,500"`, as shown in the volume column.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarketFixtures;

    fn names<'a>(rows: &[&'a KeywordMetric]) -> Vec<&'a str> {
        rows.iter().map(|m| m.keyword.as_str()).collect()
    }

    #[test]
    fn test_passive_query() {
        let f = MarketFixtures::builtin().unwrap();
        let rows = filter_keywords(&f.keywords, "passive");
        assert_eq!(names(&rows), ["passive income strategies"]);
    }

    #[test]
    fn test_case_insensitive_and_ordered() {
        let f = MarketFixtures::builtin().unwrap();
        let rows = filter_keywords(&f.keywords, "ING");
        assert_eq!(
            names(&rows),
            [
                "social media marketing guide",
                "sustainable living tips",
            ]
        );
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let f = MarketFixtures::builtin().unwrap();
        assert_eq!(filter_keywords(&f.keywords, "").len(), f.keywords.len());
    }

    #[test]
    fn test_whitespace_query_keeps_all() {
        let f = MarketFixtures::builtin().unwrap();
        assert_eq!(filter_keywords(&f.keywords, "   ").len(), f.keywords.len());
        assert_eq!(filter_keywords(&f.keywords, "\t").len(), f.keywords.len());
    }

    #[test]
    fn test_padded_query_is_not_trimmed() {
        let f = MarketFixtures::builtin().unwrap();
        assert!(filter_keywords(&f.keywords, " passive").is_empty());
        let rows = filter_keywords(&f.keywords, "passive ");
        assert_eq!(names(&rows), ["passive income strategies"]);
    }

    #[test]
    fn test_no_match() {
        let f = MarketFixtures::builtin().unwrap();
        assert!(filter_keywords(&f.keywords, "crypto").is_empty());
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(0), "0");
        assert_eq!(format_volume(999), "999");
        assert_eq!(format_volume(12500), "12,500");
        assert_eq!(format_volume(1234567), "1,234,567");
    }
}
