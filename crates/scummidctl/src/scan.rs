//! Scan pipeline: enumerate game directories, run detection on each, resolve.

use crate::config::ScummvmSettings;
use crate::errors::DetectError;
use crate::exec::DetectRunner;
use crate::report::{GameEntry, ScanReport};
use anyhow::{bail, Context, Result};
use scummid_shared::{
    best_of, extract_candidates, Disambiguator, GameMatch, ParseFailure, SimilarityConfig,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Immediate sub-directories of `data_dir`, sorted by name.
///
/// Files and deeper directories are ignored. Symlinks are not followed.
pub fn list_game_dirs(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", data_dir.display()))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Run the version check and make sure the binary really is ScummVM.
/// Returns the first line of the version banner.
pub fn verify_scummvm<R: DetectRunner + ?Sized>(
    runner: &R,
    settings: &ScummvmSettings,
) -> Result<String> {
    let result = runner.run(&settings.version_args);
    if !result.is_success() {
        bail!(
            "{} failed ({}): {}{}",
            result.full_command,
            result.failure_reason(),
            result.stdout.trim(),
            result.stderr.trim()
        );
    }
    if !result.stdout.contains(&settings.version_marker) {
        bail!(
            "The scummvm binary file is invalid: version output does not mention {}",
            settings.version_marker
        );
    }

    Ok(result.stdout.lines().next().unwrap_or_default().trim().to_string())
}

/// Detects and resolves the game in each directory
pub struct Scanner<'a, R: DetectRunner + ?Sized> {
    runner: &'a R,
    settings: &'a ScummvmSettings,
    disambiguator: Disambiguator,
}

impl<'a, R: DetectRunner + ?Sized> Scanner<'a, R> {
    pub fn new(runner: &'a R, settings: &'a ScummvmSettings, matching: SimilarityConfig) -> Self {
        Self {
            runner,
            settings,
            disambiguator: Disambiguator::new(matching),
        }
    }

    /// Identify the game in a single directory
    pub fn detect(&self, dir: &Path) -> Result<GameMatch, DetectError> {
        let result = self.runner.run(&self.settings.detect_command(dir));
        debug!(
            "{} -> {} in {}ms",
            result.full_command,
            result.status.as_str(),
            result.duration_ms
        );
        if !result.is_success() {
            return Err(DetectError::Exec(result.failure_reason()));
        }

        let candidates = extract_candidates(&result.stdout)?;
        if let [only] = candidates.as_slice() {
            return Ok(only.to_match());
        }

        let scored = self.disambiguator.score_all(&candidates);
        for row in &scored {
            match row.score {
                Some(score) => debug!(
                    "candidate {} {:?} scored {:.3}",
                    row.index, row.candidate.identifier, score
                ),
                None => debug!(
                    "candidate {} {:?} skipped: could not be normalized",
                    row.index, row.candidate.identifier
                ),
            }
        }

        best_of(&scored)
            .map(|best| best.candidate.to_match())
            .ok_or(DetectError::Parse(ParseFailure::EmptyCandidateSet))
    }

    /// Detect every directory in order. `on_result` is called after each one
    /// with the directory and whether it was identified.
    pub fn scan<F>(&self, dirs: &[PathBuf], mut on_result: F) -> ScanReport
    where
        F: FnMut(&Path, bool),
    {
        let mut report = ScanReport::default();

        for dir in dirs {
            match self.detect(dir) {
                Ok(game) => {
                    info!("{}: {} ({})", dir.display(), game.identifier, game.description);
                    report.successes.push(GameEntry::matched(&game, dir));
                    on_result(dir, true);
                }
                Err(e) => {
                    warn!("{}: [{}] {}", dir.display(), e.code(), e);
                    report.failures.push(GameEntry::failed(&e, dir));
                    on_result(dir, false);
                }
            }
        }

        report
    }
}
