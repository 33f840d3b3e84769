use std::path::PathBuf;

use super::fail;
use super::input::load_manager;

pub struct CheckArgs {
    pub input: PathBuf,
}

pub fn run(args: CheckArgs) {
    if let Err(err) = load_manager(&args.input) {
        fail(err);
    }

    // Silent on success (like cargo check)
}
