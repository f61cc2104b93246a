//! Search-Verdict: asks grep whether a word occurs in a file and reports the answer.
//!
//! grep is run as `grep -s -q <word> <filename>` so it never writes anything itself.
//! Its exit code is the answer: 0 found, 1 not found, 2 the file could not be read.
//! These meanings belong to grep; a different search utility needs its own mapping.

use crate::config::Config;
use crate::exec::{self, EXEC_FAILED};
use crate::process::ChildStatus;
use crate::print_line;
use std::ffi::{OsStr, OsString};

pub const NO_ARGUMENTS: &str = "ERROR: No arguments";
pub const GREP_NAME: &str = "grep";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Found,
    NotFound,
    Missing,
    GrepFailed,
    Signaled,
    /// The child could not exec grep.
    ExecFailed,
}

pub fn classify(status: ChildStatus) -> Verdict {
    match status {
        ChildStatus::Exited(0) => Verdict::Found,
        ChildStatus::Exited(1) => Verdict::NotFound,
        ChildStatus::Exited(2) => Verdict::Missing,
        ChildStatus::Exited(EXEC_FAILED) => Verdict::ExecFailed,
        ChildStatus::Exited(_) => Verdict::GrepFailed,
        ChildStatus::Signaled(_) => Verdict::Signaled,
    }
}

impl Verdict {
    /// The line printed for this verdict.
    pub fn message(&self, word: &str, filename: &str) -> String {
        match self {
            Verdict::Found => format!("FOUND: {}", word),
            Verdict::NotFound => format!("NOT FOUND: {}", word),
            Verdict::Missing => format!("ERROR: {} doesn't exist", filename),
            Verdict::GrepFailed => "ERROR: grep failed".to_string(),
            Verdict::Signaled => "ERROR: child terminated by signal".to_string(),
            Verdict::ExecFailed => "ERROR: exec failed".to_string(),
        }
    }

    /// Found and not found are both answers, so both exit 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Found | Verdict::NotFound => 0,
            Verdict::Missing => 2,
            Verdict::GrepFailed | Verdict::Signaled | Verdict::ExecFailed => 1,
        }
    }
}

pub fn grep_argv(word: &OsStr, filename: &OsStr) -> Vec<OsString> {
    vec![
        OsString::from(GREP_NAME),
        OsString::from("-s"),
        OsString::from("-q"),
        word.to_os_string(),
        filename.to_os_string(),
    ]
}

pub fn run(args: &[OsString], config: &Config) -> i32 {
    let (word, filename) = match args {
        [word, filename, ..] => (word, filename),
        _ => {
            print_line(NO_ARGUMENTS);
            return 1;
        }
    };

    let argv = grep_argv(word, filename);
    let status = match exec::spawn_and_wait(&config.grep_path, &argv) {
        Ok(status) => status,
        Err(err) => {
            log!("search failed: {}", err);
            print_line(err.report_line());
            return 1;
        }
    };

    let verdict = classify(status);
    log!("grep {} -> {:?}", status, verdict);
    print_line(&verdict.message(&word.to_string_lossy(), &filename.to_string_lossy()));
    verdict.exit_code()
}
