use std::path::PathBuf;

use fegen_lib::Colors;
use fegen_lib::dump::dump;

use super::fail;
use super::input::load_manager;

pub struct DumpArgs {
    pub input: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let manager = load_manager(&args.input).unwrap_or_else(|err| fail(err));
    print!("{}", dump(&manager, Colors::new(args.color)));
}
