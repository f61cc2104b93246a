use crate::error::ExecError;
use nix::sys::signal::Signal;
use nix::sys::wait::WaitStatus;
use std::fmt::{Display, Error, Formatter};

/// How a waited-for child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(Signal),
}

impl TryFrom<WaitStatus> for ChildStatus {
    type Error = ExecError;

    fn try_from(status: WaitStatus) -> Result<Self, Self::Error> {
        match status {
            WaitStatus::Exited(_, code) => Ok(ChildStatus::Exited(code)),
            WaitStatus::Signaled(_, signal, _) => Ok(ChildStatus::Signaled(signal)),
            // a blocking waitpid without WUNTRACED/WCONTINUED only reports terminations
            other => Err(ExecError::UnexpectedStatus(format!("{:?}", other))),
        }
    }
}

impl Display for ChildStatus {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            ChildStatus::Exited(code) => write!(f, "exited with {}", code),
            ChildStatus::Signaled(signal) => write!(f, "killed by {}", signal),
        }
    }
}
