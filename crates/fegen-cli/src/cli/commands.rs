//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fegen")
        .about("Front-end generator for MLIR dialects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(emit_command())
}

/// Build a dialect description and report the first semantic error.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a dialect description")
        .after_help(
            r#"EXAMPLES:
  fegen check toy.json        # silent on success
  cat toy.json | fegen check -"#,
        )
        .arg(input_arg())
}

/// Print the registry tables.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the resolved definitions of a dialect description")
        .after_help(
            r#"EXAMPLES:
  fegen dump toy.json
  fegen dump toy.json --color always | less -R"#,
        )
        .arg(input_arg())
        .arg(color_arg())
}

/// Generate grammar and dialect files.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Generate the grammar and dialect files")
        .after_help(
            r#"EXAMPLES:
  fegen emit toy.json -o build/             # every file
  fegen emit toy.json --emit tablegen -o td # Dialect, Types and Ops
  fegen emit toy.json --emit grammar        # Toy.g4 on stdout"#,
        )
        .arg(input_arg())
        .arg(emit_arg())
        .arg(output_dir_arg())
        .arg(summary_arg())
}
