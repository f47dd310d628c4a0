//! scummidctl configuration
//!
//! Optional TOML file, `scummid.toml` in the working directory unless
//! `--config` points elsewhere. Every section and key may be omitted.
//!
//! ```toml
//! [scummvm]
//! detect_args = ["--detect"]
//! path_flag = "--path="
//!
//! [matching]
//! case_sensitive = false
//!
//! [matching.costs]
//! insert = 1
//! delete = 1
//! substitute = 2
//!
//! [output]
//! success_report = "success.json"
//! error_report = "error.json"
//!
//! [log]
//! level = "info"
//! ```

use anyhow::{Context, Result};
use scummid_shared::SimilarityConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "scummid.toml";

/// How ScummVM is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScummvmSettings {
    /// Arguments for the sanity check run
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,

    /// Text the sanity check output must contain
    #[serde(default = "default_version_marker")]
    pub version_marker: String,

    /// Arguments for a detect run, before the path flag
    #[serde(default = "default_detect_args")]
    pub detect_args: Vec<String>,

    /// Prefix joined with the game directory (e.g., "--path=/games/loom")
    #[serde(default = "default_path_flag")]
    pub path_flag: String,

    /// Suffix appended to a game directory to name its marker file
    #[serde(default = "default_marker_extension")]
    pub marker_extension: String,
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

fn default_version_marker() -> String {
    "ScummVM".to_string()
}

fn default_detect_args() -> Vec<String> {
    vec!["--detect".to_string()]
}

fn default_path_flag() -> String {
    "--path=".to_string()
}

fn default_marker_extension() -> String {
    ".scummvm".to_string()
}

impl Default for ScummvmSettings {
    fn default() -> Self {
        Self {
            version_args: default_version_args(),
            version_marker: default_version_marker(),
            detect_args: default_detect_args(),
            path_flag: default_path_flag(),
            marker_extension: default_marker_extension(),
        }
    }
}

impl ScummvmSettings {
    /// Full argument list for detecting the game in `dir`
    pub fn detect_command(&self, dir: &Path) -> Vec<String> {
        let mut args = self.detect_args.clone();
        args.push(format!("{}{}", self.path_flag, dir.display()));
        args
    }
}

/// Where scan reports are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Report directory; the working directory when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_success_report")]
    pub success_report: String,

    #[serde(default = "default_error_report")]
    pub error_report: String,
}

fn default_success_report() -> String {
    "success.json".to_string()
}

fn default_error_report() -> String {
    "error.json".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: None,
            success_report: default_success_report(),
            error_report: default_error_report(),
        }
    }
}

impl OutputSettings {
    pub fn report_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Complete scummidctl configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScummidConfig {
    #[serde(default)]
    pub scummvm: ScummvmSettings,

    #[serde(default)]
    pub matching: SimilarityConfig,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub log: LogConfig,
}

impl ScummidConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `scummid.toml` in
    /// the working directory is used if present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
