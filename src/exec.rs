use crate::error::{ExecError, Result};
use crate::process::ChildStatus;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::waitpid;
use nix::unistd::{execv, fork, ForkResult};
use std::ffi::{CString, OsStr};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Exit code a forked child uses when it could not replace its image.
/// The child exits silently, the parent reports it.
pub const EXEC_FAILED: i32 = 127;

/// The Rust runtime ignores SIGPIPE; a raw execv would pass that on to the new image.
fn restore_sigpipe() {
    if let Err(errno) = unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) } {
        log!("failed to reset SIGPIPE ({})", errno);
    }
}

/// Converts arguments to the nul terminated strings execv wants, byte for byte.
pub fn to_cstrings<S: AsRef<OsStr>>(args: &[S]) -> Result<Vec<CString>> {
    let mut cargs = Vec::with_capacity(args.len());
    for arg in args {
        cargs.push(CString::new(arg.as_ref().as_bytes())?);
    }
    Ok(cargs)
}

fn path_cstring(path: &Path) -> Result<CString> {
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

/// Replaces the current process image with `path`.
/// Only comes back if execv failed.
pub fn replace_image<S: AsRef<OsStr>>(path: &Path, argv: &[S]) -> ExecError {
    let prog = match path_cstring(path) {
        Ok(prog) => prog,
        Err(err) => return err,
    };
    let args = match to_cstrings(argv) {
        Ok(args) => args,
        Err(err) => return err,
    };

    log!("execv {:?} {:?}", prog, args);
    // stdout is lost once the image is gone
    let _ = io::stdout().flush();

    restore_sigpipe();
    let err = match execv(&prog, &args) {
        Ok(never) => match never {},
        Err(errno) => errno,
    };
    log!("failed to exec {:?} ({})", prog, err);
    // still running this image, keep its disposition
    unsafe {
        let _ = signal(Signal::SIGPIPE, SigHandler::SigIgn);
    }
    ExecError::Exec(err)
}

/// Forks a child that execs `path` with `argv` and blocks until it terminates.
pub fn spawn_and_wait<S: AsRef<OsStr>>(path: &Path, argv: &[S]) -> Result<ChildStatus> {
    // built before fork so the child does not allocate
    let prog = path_cstring(path)?;
    let args = to_cstrings(argv)?;

    // anything still buffered would be written twice
    let _ = io::stdout().flush();

    match unsafe { fork() }.map_err(ExecError::Fork)? {
        ForkResult::Parent { child } => {
            log!("forked child {} for {:?}", child, prog);
            let status = waitpid(child, None).map_err(ExecError::Wait)?;
            log!("child {} reported {:?}", child, status);
            ChildStatus::try_from(status)
        }
        ForkResult::Child => {
            restore_sigpipe();
            let errno = match execv(&prog, &args) {
                Ok(never) => match never {},
                Err(errno) => errno,
            };
            log!("failed to exec {:?} ({})", prog, errno);
            unsafe { nix::libc::_exit(EXEC_FAILED) }
        }
    }
}
