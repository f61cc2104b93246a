use crate::config::Config;
use crate::exec;
use crate::print_line;
use std::ffi::OsString;
use std::ops::RangeInclusive;

pub const NO_ARGUMENTS: &str = "ERROR: No arguments";
pub const ECHO_NAME: &str = "echo";

/// 1-based positions of the middle of `n` arguments.
/// One position when `n` is odd, two when it is even.
pub fn middle_range(n: usize) -> Option<RangeInclusive<usize>> {
    if n == 0 {
        return None;
    }
    let start = if n % 2 == 1 { n / 2 + 1 } else { n / 2 };
    let end = if n % 2 == 1 { start } else { start + 1 };
    Some(start..=end)
}

pub fn middle_args(args: &[OsString]) -> &[OsString] {
    match middle_range(args.len()) {
        Some(range) => &args[range.start() - 1..*range.end()],
        None => &[],
    }
}

/// The argv handed to echo: its own name, then the middle arguments.
pub fn relay_argv(args: &[OsString]) -> Vec<OsString> {
    let mut argv = Vec::with_capacity(3);
    argv.push(OsString::from(ECHO_NAME));
    argv.extend(middle_args(args).iter().cloned());
    argv
}

/// Replaces this process with echo on the middle arguments.
/// The return value is only reached on failure.
pub fn run(args: &[OsString], config: &Config) -> i32 {
    if args.is_empty() {
        print_line(NO_ARGUMENTS);
        return 1;
    }

    let argv = relay_argv(args);
    let err = exec::replace_image(&config.echo_path, &argv);
    log!("relay to {:?} failed: {}", config.echo_path, err);
    print_line(err.report_line());
    1
}
