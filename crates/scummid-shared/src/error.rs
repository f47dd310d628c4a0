//! Error types for detection output parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a detect output could not be resolved to a single game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailure {
    /// ScummVM explicitly reported that no game was found.
    #[error("scummvm could not find any game")]
    NotFound,

    /// The result table heading or its dash rule is missing.
    #[error("scummvm output does not contain a result table")]
    NoTableFound,

    /// A table was found but none of its rows had all three fields.
    #[error("scummvm result table has no valid rows")]
    EmptyCandidateSet,
}

impl ParseFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::NoTableFound => "no_table_found",
            Self::EmptyCandidateSet => "empty_candidate_set",
        }
    }
}

/// Stemming failure for a single input string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StemError {
    #[error("nothing to stem")]
    Empty,

    #[error("unsupported control character {0:?}")]
    ControlCharacter(char),
}
