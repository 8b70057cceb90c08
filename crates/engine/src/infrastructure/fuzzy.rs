//! Edit-distance fuzzy matcher.
//!
//! A field matches when some substring of it is within
//! `floor(threshold * query_len)` edits of the query (case-insensitive,
//! anywhere in the field). Field similarity is `1 - edits / query_len`, and a
//! document's relevance is the weighted sum over its matching fields. Array
//! fields contribute their best value.

use std::cmp::Ordering;

use crate::infrastructure::ports::{FuzzyMatcher, ScoredMatch, SearchDocument, SearchKey};

/// Shortest substring that may count as a match.
pub const DEFAULT_MIN_MATCH_LEN: usize = 2;

#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    min_match_len: usize,
}

impl LevenshteinMatcher {
    pub fn new() -> Self {
        Self {
            min_match_len: DEFAULT_MIN_MATCH_LEN,
        }
    }

    /// Best similarity of `pattern` against any substring of `text`, if within
    /// `max_edits`.
    fn field_similarity(&self, pattern: &[char], text: &str, max_edits: usize) -> Option<f64> {
        let text: Vec<char> = text.to_lowercase().chars().collect();
        let edits = self.best_substring_distance(pattern, &text, max_edits)?;
        Some(1.0 - edits as f64 / pattern.len() as f64)
    }

    /// Fewest edits turning `pattern` into some substring of `text`.
    ///
    /// Sellers' variant of the edit-distance table: the text may start
    /// anywhere (zero first row) and end anywhere (minimum over the last row).
    /// `max_edits` is capped at `pattern.len() - min_match_len`, so any
    /// accepted substring is at least `min_match_len` long.
    fn best_substring_distance(
        &self,
        pattern: &[char],
        text: &[char],
        max_edits: usize,
    ) -> Option<usize> {
        if text.len() < self.min_match_len {
            return None;
        }
        if text.windows(pattern.len()).any(|w| w == pattern) {
            return Some(0);
        }
        let max_edits = max_edits.min(pattern.len().saturating_sub(self.min_match_len));
        if max_edits == 0 {
            return None;
        }

        // column[i]: edits to end pattern[..i] at the current text position
        let mut column: Vec<usize> = (0..=pattern.len()).collect();
        let mut best = usize::MAX;
        for &ch in text {
            let mut diagonal = column[0];
            for (i, &p) in pattern.iter().enumerate() {
                let substitution = diagonal + usize::from(p != ch);
                diagonal = column[i + 1];
                column[i + 1] = substitution.min(diagonal + 1).min(column[i] + 1);
            }
            best = best.min(column[pattern.len()]);
        }
        (best <= max_edits).then_some(best)
    }
}

impl Default for LevenshteinMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher for LevenshteinMatcher {
    fn score_candidates(
        &self,
        documents: &[SearchDocument],
        query: &str,
        keys: &[SearchKey],
        threshold: f64,
    ) -> Vec<ScoredMatch> {
        let pattern: Vec<char> = query.trim().to_lowercase().chars().collect();
        if pattern.len() < self.min_match_len {
            return Vec::new();
        }
        let max_edits = (threshold.clamp(0.0, 1.0) * pattern.len() as f64).floor() as usize;

        let mut matches: Vec<ScoredMatch> = documents
            .iter()
            .enumerate()
            .filter_map(|(index, document)| {
                let mut relevance = 0.0;
                let mut matched = false;
                for key in keys {
                    let best = document
                        .values(key.name)
                        .iter()
                        .filter_map(|text| self.field_similarity(&pattern, text, max_edits))
                        .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))));
                    if let Some(similarity) = best {
                        matched = true;
                        relevance += key.weight * similarity;
                    }
                }
                matched.then_some(ScoredMatch { index, relevance })
            })
            .collect();

        // Stable: equal relevance keeps input order.
        matches.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        });
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [SearchKey; 2] = [SearchKey::new("name", 0.6), SearchKey::new("tags", 0.4)];

    fn doc(name: &str, tags: &[&str]) -> SearchDocument {
        SearchDocument::new()
            .with_value("name", name)
            .with_values("tags", tags.iter().copied())
    }

    fn indices(matches: &[ScoredMatch]) -> Vec<usize> {
        matches.iter().map(|m| m.index).collect()
    }

    #[test]
    fn exact_substring_anywhere_matches() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("The Obsidian Tower", &[]), doc("Harbor", &[])];
        let matches = matcher.score_candidates(&docs, "tower", &KEYS, 0.4);
        assert_eq!(indices(&matches), vec![0]);
        assert!((matches[0].relevance - 0.6).abs() < 1e-9);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("ARIA STORMWIND", &[])];
        assert_eq!(
            indices(&matcher.score_candidates(&docs, "stormwind", &KEYS, 0.4)),
            vec![0]
        );
    }

    #[test]
    fn tolerates_typos_within_threshold() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("Stormwind Keep", &[])];
        // one substitution in a 9 char query
        let matches = matcher.score_candidates(&docs, "stormwynd", &KEYS, 0.4);
        assert_eq!(indices(&matches), vec![0]);
        assert!(matches[0].relevance < 0.6);
    }

    #[test]
    fn rejects_beyond_threshold() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("Harbor", &["port"])];
        assert!(matcher
            .score_candidates(&docs, "dragon", &KEYS, 0.4)
            .is_empty());
    }

    #[test]
    fn single_character_queries_match_nothing() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("a", &["a"]), doc("Aria", &[])];
        assert!(matcher.score_candidates(&docs, "a", &KEYS, 0.4).is_empty());
    }

    #[test]
    fn weighted_fields_rank_name_above_tags() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("Harbor", &["ember"]), doc("Ember Keep", &[])];
        let matches = matcher.score_candidates(&docs, "ember", &KEYS, 0.4);
        assert_eq!(indices(&matches), vec![1, 0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("Ember", &[]), doc("Harbor", &[]), doc("Ember", &[])];
        let matches = matcher.score_candidates(&docs, "ember", &KEYS, 0.4);
        assert_eq!(indices(&matches), vec![0, 2]);
    }

    #[test]
    fn best_tag_counts_once() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![doc("Harbor", &["ember", "embers", "ember-born"])];
        let matches = matcher.score_candidates(&docs, "ember", &KEYS, 0.4);
        assert!((matches[0].relevance - 0.4).abs() < 1e-9);
    }

    #[test]
    fn missing_fields_are_empty() {
        let matcher = LevenshteinMatcher::new();
        let docs = vec![SearchDocument::new(), doc("Ember", &[])];
        assert_eq!(
            indices(&matcher.score_candidates(&docs, "ember", &KEYS, 0.4)),
            vec![1]
        );
    }

    #[test]
    fn long_descriptions_score_quickly() {
        use crate::use_cases::search::{ELEMENT_SEARCH_KEYS, SEARCH_THRESHOLD};

        let filler = "the tide rolls over basalt shelves while gulls argue above ";
        let description: String = filler.repeat(5000 / filler.len());
        let docs: Vec<SearchDocument> = (0..100)
            .map(|i| {
                let mut text = description.clone();
                if i == 42 {
                    text.push_str("beyond lies the stormwind keep citadl");
                }
                SearchDocument::new()
                    .with_value("name", format!("Reef {}", i))
                    .with_value("description", text)
            })
            .collect();

        let matcher = LevenshteinMatcher::new();
        let started = std::time::Instant::now();
        let matches = matcher.score_candidates(
            &docs,
            "stormwind keep citadel",
            &ELEMENT_SEARCH_KEYS,
            SEARCH_THRESHOLD,
        );
        let elapsed = started.elapsed();

        assert_eq!(indices(&matches), vec![42]);
        assert!(
            elapsed < std::time::Duration::from_secs(5),
            "scoring took {:?}",
            elapsed
        );
    }

    #[test]
    fn fuzzy_match_finds_substring_with_fewest_edits() {
        let matcher = LevenshteinMatcher::new();
        let pattern: Vec<char> = "citadel".chars().collect();
        let text: Vec<char> = "old citdel and new cittadel".chars().collect();
        assert_eq!(matcher.best_substring_distance(&pattern, &text, 2), Some(1));
        assert_eq!(matcher.best_substring_distance(&pattern, &text, 0), None);
    }
}
