use std::collections::HashSet;
use std::fmt;

use strsim::jaro_winkler;

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
    TokenOverlap,
    JaroWinkler,
}

/// A scoring tier. Both names arrive normalized; scores are in [0, 1].
pub trait MatchStrategy: fmt::Debug {
    fn kind(&self) -> MatchKind;

    fn score(&self, query: &str, candidate: &str) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl MatchStrategy for Exact {
    fn kind(&self) -> MatchKind {
        MatchKind::Exact
    }

    fn score(&self, query: &str, candidate: &str) -> f64 {
        if query == candidate { 1.0 } else { 0.0 }
    }
}

/// Score given when one name contains the other as whole words.
pub const SUBSTRING_SCORE: f64 = 0.9;

#[derive(Debug, Clone, Copy, Default)]
pub struct Substring;

impl MatchStrategy for Substring {
    fn kind(&self) -> MatchKind {
        MatchKind::Substring
    }

    fn score(&self, query: &str, candidate: &str) -> f64 {
        let padded_query = format!(" {} ", query);
        let padded_candidate = format!(" {} ", candidate);
        if padded_candidate.contains(&padded_query) || padded_query.contains(&padded_candidate) {
            SUBSTRING_SCORE
        } else {
            0.0
        }
    }
}

/// Fraction of the query's words that also appear in the candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlap;

impl MatchStrategy for TokenOverlap {
    fn kind(&self) -> MatchKind {
        MatchKind::TokenOverlap
    }

    fn score(&self, query: &str, candidate: &str) -> f64 {
        let query_tokens: HashSet<&str> = query.split_whitespace().collect();
        let candidate_tokens: HashSet<&str> = candidate.split_whitespace().collect();

        if query_tokens.is_empty() {
            return 0.0;
        }

        let shared = query_tokens.intersection(&candidate_tokens).count();
        shared as f64 / query_tokens.len() as f64
    }
}

/// Edit-similarity tier for typos.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl MatchStrategy for JaroWinkler {
    fn kind(&self) -> MatchKind {
        MatchKind::JaroWinkler
    }

    fn score(&self, query: &str, candidate: &str) -> f64 {
        jaro_winkler(query, candidate)
    }
}
