//! Per-directory detection errors.
//!
//! These are recorded in the error report; they never stop a scan.

use scummid_shared::ParseFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    /// ScummVM could not be run or exited unsuccessfully
    #[error("{0}")]
    Exec(String),

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl DetectError {
    /// Stable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            DetectError::Exec(_) => "exec_failed",
            DetectError::Parse(failure) => failure.as_str(),
        }
    }
}
