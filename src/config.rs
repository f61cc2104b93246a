use lazy_static::lazy_static;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const GREP_VAR: &str = "FORKEXEC_GREP";
pub const ECHO_VAR: &str = "FORKEXEC_ECHO";
pub const LOG_VAR: &str = "FORKEXEC_LOG";

pub const DEFAULT_GREP: &str = "/usr/bin/grep";
pub const DEFAULT_ECHO: &str = "/bin/echo";

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// Settings shared by the three programs.
/// Only the location of the external utilities and the debug switch are configurable,
/// the argument contract passed to them is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub grep_path: PathBuf,
    pub echo_path: PathBuf,
    pub log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grep_path: PathBuf::from(DEFAULT_GREP),
            echo_path: PathBuf::from(DEFAULT_ECHO),
            log: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(GREP_VAR).filter(|p| !p.is_empty()) {
            config.grep_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ECHO_VAR).filter(|p| !p.is_empty()) {
            config.echo_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup(LOG_VAR) {
            config.log = parse_flag(&flag.to_string_lossy());
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Loads the configuration and switches the stderr log on if asked to.
/// Every binary calls this first.
pub fn init() -> &'static Config {
    let config: &'static Config = &*CONFIG;
    crate::log::set_print_out(config.log);
    log!("config: {:?}", config);
    config
}
