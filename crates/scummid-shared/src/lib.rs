//! Parsing and disambiguation core for ScummVM game detection.
//!
//! Turns the captured stdout of `scummvm --detect` into a single game match.
//! Everything in this crate is pure: no process execution, no file I/O, no logging.

pub mod candidate;
pub mod disambiguate;
pub mod error;
pub mod normalize;
pub mod similarity;
pub mod table;

pub use candidate::{Candidate, GameMatch};
pub use disambiguate::{best_of, parse_detect_output, Disambiguator, ScoredCandidate};
pub use error::{ParseFailure, StemError};
pub use normalize::{last_path_segment, NormalizedCandidate, Stemmer};
pub use similarity::{EditCosts, LevenshteinScorer, SimilarityConfig};
pub use table::{extract_candidates, split_row, LineEnding};
