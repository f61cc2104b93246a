#![allow(dead_code)]

use std::fs;
use std::fs::File;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temp dir holding stand-in utilities written as shell scripts.
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Writes an executable `#!/bin/sh` script and returns its path.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        let mut perms = fs::metadata(&path).expect("Failed to stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// A handle on /dev/full, where every write fails with ENOSPC.
pub fn dev_full() -> File {
    File::options()
        .write(true)
        .open("/dev/full")
        .expect("Failed to open /dev/full")
}

/// True if the hex `SigIgn` mask from /proc/<pid>/status has SIGPIPE set.
pub fn ignores_sigpipe(mask: &str) -> bool {
    let mask = u64::from_str_radix(mask.trim(), 16).expect("SigIgn is not hex");
    mask & (1 << (13 - 1)) != 0
}

/// Shell snippet printing the SigIgn mask of the running script.
pub const PRINT_SIGIGN: &str = "sed -n 's/^SigIgn:[[:space:]]*//p' /proc/$$/status";
