pub mod check;
pub mod dump;
pub mod emit;
pub mod input;


/// Report a fatal error and stop.
pub fn fail(err: fegen_lib::Error) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
