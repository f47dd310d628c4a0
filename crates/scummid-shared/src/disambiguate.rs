//! Disambiguation of detect results.
//!
//! A single row is returned as-is. With several rows, each description is
//! stemmed and compared to the stemmed last segment of its path; the row whose
//! description reads most like its directory name wins.

use crate::candidate::{Candidate, GameMatch};
use crate::error::ParseFailure;
use crate::normalize::Stemmer;
use crate::similarity::{LevenshteinScorer, SimilarityConfig};
use crate::table::extract_candidates;

/// Score of one candidate during disambiguation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// Row position in the table (0-based)
    pub index: usize,
    pub candidate: &'a Candidate,
    /// None when the candidate could not be normalized and was skipped
    pub score: Option<f64>,
}

/// Picks one candidate out of a detect table.
///
/// Immutable once built; one instance can serve many outputs concurrently.
pub struct Disambiguator {
    stemmer: Stemmer,
    scorer: LevenshteinScorer,
}

impl Default for Disambiguator {
    fn default() -> Self {
        Self::new(SimilarityConfig::default())
    }
}

impl Disambiguator {
    pub fn new(config: SimilarityConfig) -> Self {
        Self {
            stemmer: Stemmer::english(),
            scorer: LevenshteinScorer::new(config),
        }
    }

    /// Similarity between a candidate's stemmed description and stemmed path segment.
    pub fn score(&self, candidate: &Candidate) -> Option<f64> {
        let normalized = self.stemmer.normalize(candidate).ok()?;
        Some(self.scorer.similarity(&normalized.description, &normalized.path_segment))
    }

    pub fn score_all<'a>(&self, candidates: &'a [Candidate]) -> Vec<ScoredCandidate<'a>> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| ScoredCandidate {
                index,
                candidate,
                score: self.score(candidate),
            })
            .collect()
    }

    /// Select the winning candidate. A lone row is returned without scoring;
    /// otherwise see [`best_of`].
    pub fn select<'a>(&self, candidates: &'a [Candidate]) -> Result<&'a Candidate, ParseFailure> {
        match candidates {
            [] => Err(ParseFailure::EmptyCandidateSet),
            [only] => Ok(only),
            _ => best_of(&self.score_all(candidates))
                .map(|best| best.candidate)
                .ok_or(ParseFailure::EmptyCandidateSet),
        }
    }

    pub fn resolve(&self, candidates: &[Candidate]) -> Result<GameMatch, ParseFailure> {
        self.select(candidates).map(Candidate::to_match)
    }

    /// Extract the table from raw detect output and resolve it.
    pub fn parse(&self, raw: &str) -> Result<GameMatch, ParseFailure> {
        let candidates = extract_candidates(raw)?;
        self.resolve(&candidates)
    }
}

/// Pick the winner from rows that were already scored.
///
/// Only a strictly higher score replaces the current best, starting from
/// the first row at 0.0: ties keep the earlier row, skipped rows never win,
/// and if no row scores above zero the first row wins. None for an empty list.
pub fn best_of<'s, 'a>(scored: &'s [ScoredCandidate<'a>]) -> Option<&'s ScoredCandidate<'a>> {
    let mut best = scored.first()?;
    let mut best_score = 0.0;

    for row in scored {
        let Some(score) = row.score else {
            continue;
        };
        if score > best_score {
            best = row;
            best_score = score;
        }
    }

    Some(best)
}

/// Resolve raw `scummvm --detect` output with the default scorer settings.
pub fn parse_detect_output(raw: &str) -> Result<GameMatch, ParseFailure> {
    Disambiguator::default().parse(raw)
}
