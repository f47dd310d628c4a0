//! Weighted Levenshtein similarity.
//!
//! The scorer holds no global state: costs and case handling come from the
//! [`SimilarityConfig`] it was built with.

use serde::{Deserialize, Serialize};

/// Cost of each edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditCosts {
    pub insert: usize,
    pub delete: usize,
    pub substitute: usize,
}

impl Default for EditCosts {
    /// Substitution counts as a delete plus an insert.
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            substitute: 2,
        }
    }
}

/// Scorer settings. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub case_sensitive: bool,
    pub costs: EditCosts,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            costs: EditCosts::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer {
    config: SimilarityConfig,
}

impl LevenshteinScorer {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    /// Weighted edit distance turning `a` into `b`.
    pub fn distance(&self, a: &str, b: &str) -> usize {
        let (a, b) = self.chars(a, b);
        self.distance_chars(&a, &b)
    }

    /// `1 - distance / max_len`, clamped to [0, 1].
    ///
    /// Lengths are counted in characters. Two empty strings score 1.0.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let (a, b) = self.chars(a, b);
        let max_len = a.len().max(b.len());
        if max_len == 0 {
            return 1.0;
        }

        let distance = self.distance_chars(&a, &b);
        (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
    }

    fn chars(&self, a: &str, b: &str) -> (Vec<char>, Vec<char>) {
        if self.config.case_sensitive {
            (a.chars().collect(), b.chars().collect())
        } else {
            (a.to_lowercase().chars().collect(), b.to_lowercase().chars().collect())
        }
    }

    fn distance_chars(&self, a: &[char], b: &[char]) -> usize {
        let costs = self.config.costs;

        if a.is_empty() {
            return b.len() * costs.insert;
        }
        if b.is_empty() {
            return a.len() * costs.delete;
        }

        let mut prev: Vec<usize> = (0..=b.len()).map(|j| j * costs.insert).collect();
        let mut curr = vec![0; b.len() + 1];

        for (i, ca) in a.iter().enumerate() {
            curr[0] = (i + 1) * costs.delete;
            for (j, cb) in b.iter().enumerate() {
                let replace = if ca == cb { 0 } else { costs.substitute };
                curr[j + 1] = (prev[j + 1] + costs.delete)
                    .min(curr[j] + costs.insert)
                    .min(prev[j] + replace);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[b.len()]
    }
}
