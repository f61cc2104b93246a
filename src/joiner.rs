use std::ffi::OsString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

pub const NO_ARGUMENTS: &str = "ERROR: No arguments";

/// Uppercases every argument and joins them with commas, newline terminated.
///
/// Case mapping is ASCII only, like `toupper` in the C locale, and any other
/// byte goes through untouched.
pub fn upper_join(args: &[OsString]) -> Vec<u8> {
    let mut line = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(b',');
        }
        line.extend(arg.as_bytes().iter().map(u8::to_ascii_uppercase));
    }
    line.push(b'\n');
    line
}

pub fn run(args: &[OsString]) -> i32 {
    if args.is_empty() {
        crate::print_line(NO_ARGUMENTS);
        return 1;
    }

    let line = upper_join(args);
    let mut stdout = io::stdout().lock();
    match stdout.write_all(&line).and_then(|_| stdout.flush()) {
        Ok(_) => 0,
        Err(err) => {
            log!("failed to write output ({})", err);
            1
        }
    }
}
