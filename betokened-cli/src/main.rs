use std::process;

use betokened_cli::{run, Config, RunResult};

fn main() {
    env_logger::init();

    if run(&Config::new()) != RunResult::Ok {
        process::exit(1);
    }
}
