//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Parse tree in JSON form (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Parse tree file (JSON), or - for stdin")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Artifact selection (--emit).
pub fn emit_arg() -> Arg {
    Arg::new("emit")
        .long("emit")
        .value_name("WHAT")
        .default_value("all")
        .value_parser([
            "grammar",
            "types",
            "ops",
            "dialect",
            "functions",
            "tablegen",
            "all",
        ])
        .help("Files to generate (tablegen = dialect, types and ops)")
}

/// Output directory (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write files into DIR instead of stdout")
}

/// Summary and description text of generated definitions (--summary).
pub fn summary_arg() -> Arg {
    Arg::new("summary")
        .long("summary")
        .value_name("TEXT")
        .help("Summary of generated definitions")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .global(true)
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}
