//! Command implementations for scummidctl.

use crate::config::ScummidConfig;
use crate::exec::ScummvmExec;
use crate::report::{write_markers, write_reports};
use crate::scan::{list_game_dirs, verify_scummvm, Scanner};
use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use scummid_shared::{Disambiguator, GameMatch};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Scan every game directory under `data_dir`.
pub fn scan(
    config: &ScummidConfig,
    binary: &Path,
    data_dir: &Path,
    output_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    if !binary.exists() || binary.is_dir() {
        bail!("The first argument is not a file: {}", binary.display());
    }
    if !data_dir.is_dir() {
        bail!("The second argument is not a directory: {}", data_dir.display());
    }

    let exec = ScummvmExec::new(binary);
    let banner = verify_scummvm(&exec, &config.scummvm)?;
    info!("Using {}", banner);

    let dirs = list_game_dirs(data_dir)?;
    info!("Found {} game directories in {}", dirs.len(), data_dir.display());

    let scanner = Scanner::new(&exec, &config.scummvm, config.matching);
    let report = scanner.scan(&dirs, |dir, identified| {
        let mark = if identified { "✅" } else { "❌" };
        println!("{}... {}", dir.display(), mark);
    });

    let mut output = config.output.clone();
    if output_dir.is_some() {
        output.dir = output_dir;
    }
    let (success_path, error_path) = write_reports(&report, &output)?;
    info!("Reports written to {} and {}", success_path.display(), error_path.display());

    if dry_run {
        info!("Dry run: skipping marker files");
    } else {
        println!("Writing entries out to {} files...", config.scummvm.marker_extension);
        let written = write_markers(&report.successes, &config.scummvm.marker_extension)?;
        info!("Wrote {} marker files", written.len());
    }

    println!(
        "{} identified, {} failed",
        report.successes.len().green(),
        report.failures.len().red()
    );

    Ok(())
}

/// Resolve captured detect output from a file (or stdin for "-") and print it as JSON.
pub fn parse(config: &ScummidConfig, input: &Path) -> Result<()> {
    let raw = read_input(input)?;
    let game = resolve(config, &raw).with_context(|| format!("Could not resolve {}", input.display()))?;
    println!("{}", serde_json::to_string_pretty(&game)?);
    Ok(())
}

fn resolve(config: &ScummidConfig, raw: &str) -> Result<GameMatch> {
    Ok(Disambiguator::new(config.matching).parse(raw)?)
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
    }
}
