//! Three small process utilities sharing one set of fork/exec/wait plumbing.
//!
//! - `upper-join` uppercases its arguments and joins them with commas.
//! - `echo-relay` replaces itself with echo on its middle argument(s).
//! - `search-verdict` runs grep in a child and reports whether a word is in a file.

#[macro_use]
pub mod log;
pub mod config;
pub mod error;
pub mod process;
pub mod exec;
pub mod joiner;
pub mod relay;
pub mod verdict;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

/// The user arguments, without the program name.
pub fn user_args() -> Vec<OsString> {
    env::args_os().skip(1).collect()
}

/// Writes one line to stdout.
/// A failed write is logged and dropped; the caller's exit code stands.
pub fn print_line(line: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
        log!("failed to write output ({})", err);
    }
}
