//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but are populated from clap; the
//! `From` impls resolve choices (color detection, artifact sets) on the way.

use std::path::PathBuf;

use clap::ArgMatches;
use fegen_lib::Artifact;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::emit::EmitArgs;

pub struct CheckParams {
    pub input: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self { input: p.input }
    }
}

pub struct DumpParams {
    pub input: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EmitParams {
    pub input: PathBuf,
    pub emit: String,
    pub output: Option<PathBuf>,
    pub summary: Option<String>,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            emit: m
                .get_one::<String>("emit")
                .cloned()
                .unwrap_or_else(|| "all".to_owned()),
            output: m.get_one::<PathBuf>("output").cloned(),
            summary: m.get_one::<String>("summary").cloned(),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            input: p.input,
            artifacts: parse_artifacts(&p.emit),
            output: p.output,
            summary: p.summary,
        }
    }
}

fn parse_input(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Map an `--emit` value to the files it stands for.
pub fn parse_artifacts(emit: &str) -> Vec<Artifact> {
    match emit {
        "grammar" => vec![Artifact::Grammar],
        "types" => vec![Artifact::Types],
        "ops" => vec![Artifact::Ops],
        "dialect" => vec![Artifact::Dialect],
        "functions" => vec![Artifact::Functions],
        "tablegen" => Artifact::TABLEGEN.to_vec(),
        _ => Artifact::ALL.to_vec(),
    }
}
