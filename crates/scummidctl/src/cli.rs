//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Version is embedded at build time
const VERSION: &str = env!("SCUMMID_VERSION");

#[derive(Parser, Debug)]
#[command(name = "scummidctl")]
#[command(about = "Identify ScummVM games and write .scummvm marker files", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Configuration file (default: ./scummid.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect every game directory under DATA_DIR and write reports and markers
    Scan {
        /// ScummVM executable
        binary: PathBuf,

        /// Directory whose immediate sub-directories each hold one game
        data_dir: PathBuf,

        /// Where success.json and error.json are written (default: current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Write reports only, no marker files
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve captured `scummvm --detect` output and print the match as JSON
    Parse {
        /// File with the captured output, or "-" for stdin
        input: PathBuf,
    },
}
