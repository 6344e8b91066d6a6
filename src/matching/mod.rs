//! Linking free-text ingredient names to store entries.
//!
//! A [`NameMatcher`] runs its strategies in order (exact, then substring,
//! then token overlap by default) and stops at the first tier whose best
//! candidate meets the threshold.

mod strategies;

pub use strategies::{Exact, JaroWinkler, MatchKind, MatchStrategy, Substring, TokenOverlap};

/// Default minimum score for a match to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;

/// Lowercase, turn punctuation into spaces, collapse whitespace.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// An accepted match.
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    pub candidate: String,
    pub score: f64,
    pub kind: MatchKind,
}

impl NameMatch {
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

#[derive(Debug)]
pub struct NameMatcher {
    threshold: f64,
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl NameMatcher {
    /// Exact, substring, and token-overlap tiers with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            strategies: vec![Box::new(Exact), Box::new(Substring), Box::new(TokenOverlap)],
        }
    }

    /// Append a tier, tried after the existing ones.
    pub fn with_strategy(mut self, strategy: Box<dyn MatchStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Best candidate from the first tier that clears the threshold.
    ///
    /// Within a tier, ties go to the lexicographically smaller candidate.
    pub fn best_match<'a, I>(&self, query: &str, candidates: I) -> Option<NameMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = normalize_name(query);
        if query.is_empty() {
            return None;
        }

        let candidates: Vec<(&str, String)> = candidates
            .into_iter()
            .map(|c| (c, normalize_name(c)))
            .collect();

        for strategy in &self.strategies {
            let mut best: Option<(&str, f64)> = None;

            for (original, normalized) in &candidates {
                let score = strategy.score(&query, normalized);
                if score < self.threshold || score <= 0.0 {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((name, top)) => score > top || (score == top && *original < name),
                };
                if better {
                    best = Some((*original, score));
                }
            }

            if let Some((name, score)) = best {
                tracing::debug!(
                    "Matched '{}' to '{}' ({:?}, {:.2})",
                    query,
                    name,
                    strategy.kind(),
                    score
                );
                return Some(NameMatch {
                    candidate: name.to_string(),
                    score,
                    kind: strategy.kind(),
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: [&str; 5] = [
        "All Purpose Flour",
        "Unsalted Butter",
        "Kosher Salt",
        "Granulated Sugar",
        "Brown Sugar, Light",
    ];

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Brown Sugar,  Light "), "brown sugar light");
    }

    #[test]
    fn test_exact_wins_first() {
        let matcher = NameMatcher::default();
        let m = matcher.best_match("kosher salt", STORE).unwrap();
        assert_eq!(m.candidate, "Kosher Salt");
        assert!(m.is_exact());
    }

    #[test]
    fn test_substring_on_word_boundaries() {
        let matcher = NameMatcher::default();
        let m = matcher.best_match("flour", STORE).unwrap();
        assert_eq!(m.candidate, "All Purpose Flour");
        assert_eq!(m.kind, MatchKind::Substring);

        // "salt" must not match inside "unsalted"
        let m = matcher.best_match("salt", STORE).unwrap();
        assert_eq!(m.candidate, "Kosher Salt");
    }

    #[test]
    fn test_token_overlap() {
        let matcher = NameMatcher::default();
        let m = matcher.best_match("light brown sugar", STORE).unwrap();
        assert_eq!(m.candidate, "Brown Sugar, Light");
        assert_eq!(m.kind, MatchKind::TokenOverlap);
    }

    #[test]
    fn test_reordered_query_links_to_longer_name() {
        let m = NameMatcher::default()
            .best_match("sugar brown", ["Brown Sugar Light"])
            .unwrap();
        assert_eq!(m.candidate, "Brown Sugar Light");
        assert_eq!(m.kind, MatchKind::TokenOverlap);
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_threshold_is_configurable() {
        // two of three query words appear in "Brown Sugar, Light"
        let strict = NameMatcher::new(0.95);
        assert!(strict.best_match("dark brown sugar", STORE).is_none());

        let loose = NameMatcher::new(0.5);
        let m = loose.best_match("dark brown sugar", STORE).unwrap();
        assert_eq!(m.candidate, "Brown Sugar, Light");
        assert_eq!(m.kind, MatchKind::TokenOverlap);
    }

    #[test]
    fn test_jaro_winkler_tier_catches_typos() {
        let matcher = NameMatcher::default();
        assert!(matcher.best_match("granulted sugar", STORE).is_none());

        let matcher = NameMatcher::default().with_strategy(Box::new(JaroWinkler));
        let m = matcher.best_match("granulted sugar", STORE).unwrap();
        assert_eq!(m.candidate, "Granulated Sugar");
        assert_eq!(m.kind, MatchKind::JaroWinkler);
    }

    #[test]
    fn test_empty_query() {
        assert!(NameMatcher::default().best_match("  ", STORE).is_none());
    }
}
