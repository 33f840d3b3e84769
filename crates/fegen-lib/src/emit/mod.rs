//! Serialization of the registry into output files.
//!
//! Emitters only read the registry and may run in any order once the build is
//! complete.

mod config;
mod functions;
mod grammar;
mod tablegen;
mod writer;


pub use config::{DEFAULT_SUMMARY, EmitConfig};

use crate::Result;
use crate::manager::Manager;

/// One generated file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Artifact {
    Grammar,
    Types,
    Ops,
    Dialect,
    Functions,
}

impl Artifact {
    pub const ALL: [Self; 5] = [
        Self::Grammar,
        Self::Dialect,
        Self::Types,
        Self::Ops,
        Self::Functions,
    ];

    /// The TableGen files, dialect first.
    pub const TABLEGEN: [Self; 3] = [Self::Dialect, Self::Types, Self::Ops];

    /// File name for `module`, e.g. `ToyOps.td`.
    pub fn file_name(self, module: &str) -> String {
        match self {
            Self::Grammar => format!("{module}.g4"),
            Self::Types => format!("{module}Types.td"),
            Self::Ops => format!("{module}Ops.td"),
            Self::Dialect => format!("{module}Dialect.td"),
            Self::Functions => format!("{module}Functions.cpp"),
        }
    }

    pub fn emit(self, manager: &Manager, config: &EmitConfig) -> Result<String> {
        match self {
            Self::Grammar => manager.emit_grammar(config),
            Self::Types => manager.emit_type_definitions(config),
            Self::Ops => manager.emit_operation_definitions(config),
            Self::Dialect => manager.emit_dialect_definition(config),
            Self::Functions => manager.emit_functions(config),
        }
    }
}

impl Manager {
    /// `<Module>.g4`: every rule with its alternatives.
    pub fn emit_grammar(&self, config: &EmitConfig) -> Result<String> {
        Ok(grammar::emit(self, config))
    }

    /// `<Module>Types.td`: the user type definitions.
    pub fn emit_type_definitions(&self, config: &EmitConfig) -> Result<String> {
        tablegen::emit_types(self, config)
    }

    /// `<Module>Ops.td`: the operations.
    pub fn emit_operation_definitions(&self, config: &EmitConfig) -> Result<String> {
        tablegen::emit_ops(self, config)
    }

    /// `<Module>Dialect.td`: the dialect itself.
    pub fn emit_dialect_definition(&self, config: &EmitConfig) -> Result<String> {
        Ok(tablegen::emit_dialect(self, config))
    }

    /// `<Module>Functions.cpp`: the functions in host notation.
    pub fn emit_functions(&self, config: &EmitConfig) -> Result<String> {
        functions::emit(self, config)
    }
}
