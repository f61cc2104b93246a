use forkexec::{config, relay, user_args};
use std::process::exit;

fn main() {
    let config = config::init();
    exit(relay::run(&user_args(), config));
}
