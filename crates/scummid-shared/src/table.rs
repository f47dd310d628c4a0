//! Extractor for the result table printed by `scummvm --detect`.
//!
//! Expected format:
//! ```text
//! GameID                         Description                                                Full Path
//! ------------------------------ ---------------------------------------------------------- ---------------------------------------------------------
//! scumm:loom                     Loom (VGA/DOS/English)                                     G:\example\scummvm\Loom (CD DOS VGA)\
//! ```
//!
//! Columns are padded with spaces, so any run of two or more whitespace
//! characters separates fields. Single spaces belong to the field.

use crate::candidate::Candidate;
use crate::error::ParseFailure;
use regex::Regex;
use std::sync::LazyLock;

/// Printed by ScummVM when nothing under the path was recognised.
pub const NOT_FOUND_SENTINEL: &str = "WARNING: ScummVM could not find any game in";

static TABLE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GameID\s+Description\s+Full Path").unwrap());

static TABLE_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+\s-+\s-+$").unwrap());

static COLUMN_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Line terminator used by a captured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF if it occurs anywhere in the text, LF otherwise.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Split one table row into a candidate.
///
/// The identifier ends at the first column gap and the path starts after the
/// last one; the description is whatever lies between. Rows with fewer than
/// two gaps, or with a blank field, yield None.
pub fn split_row(line: &str) -> Option<Candidate> {
    let line = line.trim();
    let mut gaps = COLUMN_GAP.find_iter(line);
    let first = gaps.next()?;
    let last = gaps.last()?;

    Candidate::new(
        &line[..first.start()],
        &line[first.end()..last.start()],
        &line[last.end()..],
    )
}

/// Extract every candidate row from a detect output.
///
/// Only the first dash rule opens the data region; everything after it, up to
/// the end of input, is read as rows.
pub fn extract_candidates(raw: &str) -> Result<Vec<Candidate>, ParseFailure> {
    // Checked before any table search: a table elsewhere in the text does not matter
    if raw.contains(NOT_FOUND_SENTINEL) {
        return Err(ParseFailure::NotFound);
    }

    if !TABLE_HEADING.is_match(raw) {
        return Err(ParseFailure::NoTableFound);
    }

    let mut lines = raw.split(LineEnding::detect(raw).as_str());
    if !lines.by_ref().any(|line| TABLE_RULE.is_match(line)) {
        return Err(ParseFailure::NoTableFound);
    }

    let candidates: Vec<Candidate> = lines.filter_map(split_row).collect();
    if candidates.is_empty() {
        return Err(ParseFailure::EmptyCandidateSet);
    }

    Ok(candidates)
}
