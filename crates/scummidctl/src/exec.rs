//! ScummVM process execution.
//!
//! Runs the binary with the given arguments and captures exit code, stdout,
//! stderr and duration. Output is returned as-is; interpreting it is the
//! parser's job.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

/// Result of a command execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Full command that was executed
    pub full_command: String,
    /// Exit code (0 = success, -1 = not started or killed by signal)
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
    pub status: ExecutionStatus,
}

/// Execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Command ran successfully (exit code 0)
    Success,
    /// Command ran but returned non-zero exit code
    NonZeroExit,
    /// Binary not found
    CommandNotFound,
    PermissionDenied,
    /// Other OS error while spawning
    OsError,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NonZeroExit => "non-zero exit",
            Self::CommandNotFound => "command not found",
            Self::PermissionDenied => "permission denied",
            Self::OsError => "OS error",
        }
    }
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Success
    }

    /// One-line reason for a failed run, suitable for the error report
    pub fn failure_reason(&self) -> String {
        match self.status {
            ExecutionStatus::Success => "success".to_string(),
            ExecutionStatus::NonZeroExit => format!("exit status {}", self.exit_code),
            _ => {
                let stderr = self.stderr.trim();
                if stderr.is_empty() {
                    self.status.as_str().to_string()
                } else {
                    format!("{}: {}", self.status.as_str(), stderr)
                }
            }
        }
    }
}

/// Anything that can run ScummVM with a list of arguments.
///
/// Production code uses [`ScummvmExec`]; tests substitute canned output.
pub trait DetectRunner {
    fn run(&self, args: &[String]) -> CommandResult;
}

/// Runs a real ScummVM binary
#[derive(Debug, Clone)]
pub struct ScummvmExec {
    binary: PathBuf,
}

impl ScummvmExec {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Execute the binary directly (no shell) with `args`
    pub fn execute(&self, args: &[String]) -> CommandResult {
        let start = Instant::now();
        let full_command = if args.is_empty() {
            self.binary.display().to_string()
        } else {
            format!("{} {}", self.binary.display(), args.join(" "))
        };

        let output = Command::new(&self.binary).args(args).output();
        let duration_ms = start.elapsed().as_millis() as u64;

        match output {
            Ok(output) => {
                let status = if output.status.success() {
                    ExecutionStatus::Success
                } else {
                    ExecutionStatus::NonZeroExit
                };

                CommandResult {
                    full_command,
                    exit_code: output.status.code().unwrap_or(-1),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                    duration_ms,
                    status,
                }
            }
            Err(e) => {
                let status = match e.kind() {
                    std::io::ErrorKind::NotFound => ExecutionStatus::CommandNotFound,
                    std::io::ErrorKind::PermissionDenied => ExecutionStatus::PermissionDenied,
                    _ => ExecutionStatus::OsError,
                };

                CommandResult {
                    full_command,
                    exit_code: -1,
                    stdout: String::new(),
                    stderr: format!("OS error: {}", e),
                    duration_ms,
                    status,
                }
            }
        }
    }
}

impl DetectRunner for ScummvmExec {
    fn run(&self, args: &[String]) -> CommandResult {
        self.execute(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_binary() {
        let exec = ScummvmExec::new("/nonexistent/path/scummvm-does-not-exist");
        let result = exec.execute(&args(&["--version"]));
        assert_eq!(result.status, ExecutionStatus::CommandNotFound);
        assert_eq!(result.exit_code, -1);
        assert!(result.stdout.is_empty());
        assert!(result.failure_reason().starts_with("command not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let exec = ScummvmExec::new("sh");
        let result = exec.execute(&args(&["-c", "echo 'ScummVM 2.7.0 (Feb 14 2023 14:26:43)'"]));
        assert!(result.is_success());
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("ScummVM 2.7.0"));
        assert!(result.full_command.starts_with("sh -c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_keeps_output() {
        let exec = ScummvmExec::new("sh");
        let result = exec.execute(&args(&["-c", "echo partial; exit 3"]));
        assert_eq!(result.status, ExecutionStatus::NonZeroExit);
        assert_eq!(result.exit_code, 3);
        assert_eq!(result.stdout.trim(), "partial");
        assert_eq!(result.failure_reason(), "exit status 3");
    }
}
