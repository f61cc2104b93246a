use forkexec::{config, user_args, verdict};
use std::process::exit;

fn main() {
    let config = config::init();
    exit(verdict::run(&user_args(), config));
}
