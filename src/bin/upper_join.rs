use forkexec::{config, joiner, user_args};
use std::process::exit;

fn main() {
    config::init();
    exit(joiner::run(&user_args()));
}
