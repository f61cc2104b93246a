use nix::errno::Errno;
use std::ffi::NulError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExecError>;

/// Failures of the fork/exec/wait plumbing.
/// None of these are retried; the caller prints `report_line` and exits 1.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("fork failed: {0}")]
    Fork(Errno),
    #[error("exec failed: {0}")]
    Exec(Errno),
    #[error("waitpid failed: {0}")]
    Wait(Errno),
    #[error("argument contains a nul byte: {0}")]
    Nul(#[from] NulError),
    #[error("unexpected wait status: {0}")]
    UnexpectedStatus(String),
}

impl ExecError {
    /// The single stdout line reported for this failure.
    pub fn report_line(&self) -> &'static str {
        match self {
            ExecError::Fork(_) => "ERROR: fork failed",
            ExecError::Exec(_) => "ERROR: exec failed",
            ExecError::Wait(_) => "ERROR: waitpid failed",
            ExecError::Nul(_) => "ERROR: invalid argument",
            ExecError::UnexpectedStatus(_) => "ERROR: waitpid failed",
        }
    }
}
