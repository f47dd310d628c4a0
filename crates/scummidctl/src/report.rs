//! Scan reports and marker files.
//!
//! `success.json` and `error.json` hold arrays of `{GameID, Description, Directory}`
//! entries, indented with four spaces. Every identified directory also gets a
//! `<directory>.scummvm` marker file holding only its GameID.

use crate::config::OutputSettings;
use crate::errors::DetectError;
use anyhow::{Context, Result};
use scummid_shared::GameMatch;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// GameID recorded for directories that could not be identified
pub const UNKNOWN_GAME_ID: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(rename = "GameID")]
    pub game_id: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Directory")]
    pub directory: String,
}

impl GameEntry {
    pub fn matched(game: &GameMatch, directory: &Path) -> Self {
        Self {
            game_id: game.identifier.clone(),
            description: game.description.clone(),
            directory: directory.display().to_string(),
        }
    }

    /// Error entry: the description carries the failure message
    pub fn failed(error: &DetectError, directory: &Path) -> Self {
        Self {
            game_id: UNKNOWN_GAME_ID.to_string(),
            description: error.to_string(),
            directory: directory.display().to_string(),
        }
    }
}

/// Outcome of one scan, in directory order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub successes: Vec<GameEntry>,
    pub failures: Vec<GameEntry>,
}

impl ScanReport {
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }
}

/// Serialize entries as a JSON array indented with four spaces
pub fn to_report_json(entries: &[GameEntry]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;
    Ok(buf)
}

/// Write both report files, returning their paths (success, error)
pub fn write_reports(report: &ScanReport, output: &OutputSettings) -> Result<(PathBuf, PathBuf)> {
    let dir = output.report_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let success_path = dir.join(&output.success_report);
    let error_path = dir.join(&output.error_report);

    fs::write(&success_path, to_report_json(&report.successes)?)
        .with_context(|| format!("Failed to write {}", success_path.display()))?;
    fs::write(&error_path, to_report_json(&report.failures)?)
        .with_context(|| format!("Failed to write {}", error_path.display()))?;

    Ok((success_path, error_path))
}

/// Marker file path for a game directory: the directory path plus `extension`
pub fn marker_path(directory: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", directory, extension))
}

/// Write one marker file per identified game. Returns the paths written.
pub fn write_markers(entries: &[GameEntry], extension: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = marker_path(&entry.directory, extension);
        fs::write(&path, &entry.game_id)
            .with_context(|| format!("Failed to write marker {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
