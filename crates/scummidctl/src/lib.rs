//! scummidctl library: everything around the detect output parser.
//!
//! Runs ScummVM over a directory of games, resolves each detect output with
//! `scummid-shared`, and writes the JSON reports and marker files.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod scan;

pub use config::ScummidConfig;
pub use errors::DetectError;
pub use exec::{CommandResult, DetectRunner, ExecutionStatus, ScummvmExec};
pub use report::{GameEntry, ScanReport};
pub use scan::Scanner;
