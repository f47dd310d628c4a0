//! Candidate normalization: English stemming of descriptions and path segments.

use crate::candidate::Candidate;
use crate::error::StemError;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Snowball English stop words. These are returned as-is instead of stemmed.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she",
    "should", "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Stems of one candidate, ready for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCandidate {
    pub description: String,
    pub path_segment: String,
}

/// Case-insensitive English (Porter2) stemmer.
pub struct Stemmer {
    inner: SnowballStemmer,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer {
    pub fn english() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }

    /// Lowercase, trim and stem the whole input as a single term.
    ///
    /// Stop words come back unstemmed. Tabs and other whitespace control
    /// characters are accepted; any other control character is an error.
    pub fn stem(&self, input: &str) -> Result<String, StemError> {
        let term = input.trim().to_lowercase();
        if term.is_empty() {
            return Err(StemError::Empty);
        }
        if let Some(c) = term.chars().find(|c| c.is_control() && !c.is_whitespace()) {
            return Err(StemError::ControlCharacter(c));
        }
        if STOP_WORDS.contains(&term.as_str()) {
            return Ok(term);
        }

        Ok(self.inner.stem(&term).into_owned())
    }

    /// Stem a candidate's description and the last segment of its path.
    pub fn normalize(&self, candidate: &Candidate) -> Result<NormalizedCandidate, StemError> {
        let description = self.stem(&candidate.description)?;
        let path_segment = self.stem(last_path_segment(&candidate.source_path))?;

        Ok(NormalizedCandidate {
            description,
            path_segment,
        })
    }
}

/// Deepest component of a path, accepting both `/` and `\` separators.
///
/// Trailing separators are ignored, so `G:\games\Loom\` gives `Loom`.
/// A path made only of separators gives an empty string.
pub fn last_path_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}
